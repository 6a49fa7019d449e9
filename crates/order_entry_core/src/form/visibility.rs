//! Field visibility per order type.
//!
//! | type       | price          | stop price | total editable |
//! |------------|----------------|------------|----------------|
//! | market     | hidden         | no         | no             |
//! | limit      | shown/editable | no         | yes            |
//! | stop       | shown/editable | yes        | yes            |
//! | stop_limit | shown/editable | yes        | yes            |

use super::types::OrderType;

/// Which inputs the form renders and accepts for an order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldVisibility {
    pub price_visible: bool,
    pub price_editable: bool,
    pub stop_price_visible: bool,
    pub total_editable: bool,
}

const MARKET: FieldVisibility = FieldVisibility {
    price_visible: false,
    price_editable: false,
    stop_price_visible: false,
    total_editable: false,
};

const LIMIT: FieldVisibility = FieldVisibility {
    price_visible: true,
    price_editable: true,
    stop_price_visible: false,
    total_editable: true,
};

const STOP: FieldVisibility = FieldVisibility {
    price_visible: true,
    price_editable: true,
    stop_price_visible: true,
    total_editable: true,
};

/// Single lookup shared by spot, perpetual and generic order forms.
pub fn fields_for(order_type: OrderType) -> FieldVisibility {
    match order_type {
        OrderType::Market => MARKET,
        OrderType::Limit => LIMIT,
        OrderType::Stop | OrderType::StopLimit => STOP,
    }
}
