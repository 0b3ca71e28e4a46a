pub mod crossover;
pub mod ega_optimizer;
pub mod fitness;
pub mod mutation;
pub mod retry;
pub mod selection;
