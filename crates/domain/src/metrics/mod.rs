pub mod sharpe;

pub use sharpe::sharpe_ratio;
