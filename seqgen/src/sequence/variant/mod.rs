mod arity_range;
mod chain;
mod combinations;
mod combinations_with_replacement;
mod count;
mod cycle;
mod fibonacci;
mod permutations;
mod product;
mod range;
mod repeat;
mod slice;
mod wrapper;

pub(crate) use arity_range::Family;
pub use arity_range::{Arities, ArityRange};
pub use chain::Chain;
pub use combinations::Combinations;
pub use combinations_with_replacement::CombinationsWithReplacement;
pub use count::Count;
pub use cycle::Cycle;
pub use fibonacci::Fibonacci;
pub use permutations::Permutations;
pub use product::Product;
pub use range::Range;
pub use repeat::Repeat;
pub use slice::Slice;
pub use wrapper::Wrapper;
