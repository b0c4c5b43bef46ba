// Next-close regression model
pub mod model;

// Min-max normalization
pub mod scaler;

// Sliding-window feature construction
pub mod windowing;
