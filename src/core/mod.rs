// Core algorithm exports
pub mod assessor;
pub mod factors;
pub mod model;
pub mod scoring;

pub use assessor::{Assessment, Assessor};
pub use factors::{identify_risk_factors, recommendations, RECOMMENDATIONS};
pub use model::{HeuristicModel, RiskModel};
pub use scoring::{classify, risk_score};
