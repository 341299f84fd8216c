#[cfg(test)]
mod builder;

#[cfg(test)]
mod serde_wire;
