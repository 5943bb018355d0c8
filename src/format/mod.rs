pub mod consts;
pub mod direction;
pub mod distance;
pub mod models;
pub mod trade;
#[cfg(test)]
mod tests;
