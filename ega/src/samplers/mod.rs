pub mod rejection_sampler;
