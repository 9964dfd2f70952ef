pub mod decimal;
pub mod traits;

pub use decimal::DecimalGenerator;
pub use traits::ValueGenerator;

#[cfg(test)]
pub use traits::MockValueGenerator;
