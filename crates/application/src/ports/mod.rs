mod txt_lookup;

pub use txt_lookup::TxtLookup;
