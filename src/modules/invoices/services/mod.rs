pub mod line_calculator;

pub use line_calculator::LineCalculator;
