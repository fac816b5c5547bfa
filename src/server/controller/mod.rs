//! HTTP request handlers.
//!
//! Controllers extract path parameters and bodies, convert DTOs to service parameters,
//! call the service layer, and convert domain models back into DTOs.

pub mod index;
pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

#[cfg(test)]
mod test;
