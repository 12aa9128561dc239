/*
[INPUT]:  Raw user-supplied order fields
[OUTPUT]: Validated OrderSpec and its request parameters
[POS]:    Order layer - pure validation and parameter assembly (no I/O)
[UPDATE]: When adding order types or validation rules
*/

pub mod builder;
pub mod spec;
pub mod validate;

pub use builder::build_order_params;
pub use spec::{OrderSpec, RawOrder};
pub use validate::{
    validate_order_type, validate_price, validate_quantity, validate_side, validate_stop_price,
    validate_symbol, validate_time_in_force,
};
