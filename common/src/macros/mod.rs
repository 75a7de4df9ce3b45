pub mod block_on;
