pub mod shop_session;

pub use shop_session::ShopSession;
