pub mod health;
pub mod ticket;

#[cfg(test)]
pub(crate) mod mock;
