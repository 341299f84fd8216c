

#[cfg(test)]
mod saved;

#[cfg(test)]
mod meta;
