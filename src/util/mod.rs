pub mod avgturns;
pub mod cell;
pub mod logger;
