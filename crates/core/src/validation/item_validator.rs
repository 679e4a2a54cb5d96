//! Rule set for [`Item`] submissions.

use validator::ValidateRange;

use super::binding::BindingResult;
use super::validator::Validator;
use super::violation::MessageArg;
use crate::item::{Item, ItemField};

pub const PRICE_MIN: i32 = 1_000;
pub const PRICE_MAX: i32 = 1_000_000;
/// Quantities must stay strictly below this value.
pub const QUANTITY_MAX: i32 = 9_999;
pub const TOTAL_PRICE_MIN: i64 = 10_000;

pub const CODE_REQUIRED: &str = "required";
pub const CODE_RANGE: &str = "range";
pub const CODE_MAX: &str = "max";
pub const CODE_TOTAL_PRICE_MIN: &str = "totalPriceMin";

/// Validates new items. Every rule runs on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemValidator;

impl Validator<Item> for ItemValidator {
    fn validate_into(&self, errors: &mut BindingResult<'_, Item>) {
        let item = errors.target();

        errors.reject_if_empty_or_whitespace(ItemField::Name, CODE_REQUIRED);

        let price_in_range = item
            .price
            .is_some_and(|price| price.validate_range(Some(PRICE_MIN), Some(PRICE_MAX), None, None));
        if !price_in_range {
            errors.reject_value(
                ItemField::Price,
                CODE_RANGE,
                vec![MessageArg::from(PRICE_MIN), MessageArg::from(PRICE_MAX)],
                None,
            );
        }

        let quantity_below_max = item
            .quantity
            .is_some_and(|quantity| quantity.validate_range(None, None, None, Some(QUANTITY_MAX)));
        if !quantity_below_max {
            errors.reject_value(
                ItemField::Quantity,
                CODE_MAX,
                vec![MessageArg::from(QUANTITY_MAX)],
                None,
            );
        }

        if let (Some(price), Some(quantity)) = (item.price, item.quantity) {
            let total = i64::from(price) * i64::from(quantity);
            if total < TOTAL_PRICE_MIN {
                errors.reject(
                    CODE_TOTAL_PRICE_MIN,
                    vec![MessageArg::from(TOTAL_PRICE_MIN), MessageArg::from(total)],
                    None,
                );
            }
        }
    }
}
