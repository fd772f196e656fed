mod liquidity;
mod order_event;
mod order_status;
mod side;
mod time_in_force;

pub use liquidity::Liquidity;
pub use order_event::{OrderEvent, OrderEventKind};
pub use order_status::OrderStatus;
pub use side::Side;
pub use time_in_force::TimeInForce;
