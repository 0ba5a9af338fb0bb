mod lookup;

pub use lookup::build_resolver;
