pub mod util;
pub mod vandermonde;

pub use util::*;
pub use vandermonde::*;

pub trait Matrix<F> {
    fn get_len(&self) -> usize;
    fn get_matrix(&self) -> Vec<F>;
}
