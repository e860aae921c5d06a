//! Back-office order table.

use crate::domain::auth::AuthenticatedUser;
use crate::domain::order::{Order, OrderStatus};
use crate::domain::types::OrderId;
use crate::repository::{OrderReader, OrderWriter};
use crate::services::{ServiceError, ServiceResult, ensure_admin};

pub fn load_orders<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Vec<Order>>
where
    R: OrderReader + ?Sized,
{
    ensure_admin(user)?;

    let orders = repo.list_orders().map_err(|err| {
        log::error!("Failed to fetch orders: {err}");
        err
    })?;

    Ok(orders)
}

/// Moves an order to `status` and reloads the whole table from the source.
///
/// `orders` is left untouched when either the write or the reload fails.
pub fn update_order_status<R>(
    repo: &R,
    user: &AuthenticatedUser,
    orders: &mut Vec<Order>,
    order_id: &str,
    status: &str,
) -> ServiceResult<()>
where
    R: OrderReader + OrderWriter + ?Sized,
{
    ensure_admin(user)?;

    let order_id = OrderId::new(order_id)?;
    let status: OrderStatus = status
        .parse()
        .map_err(|err| ServiceError::InvalidArgument(format!("{err}")))?;

    repo.update_order_status(&order_id, status).map_err(|err| {
        log::error!("Failed to update status of order {order_id}: {err}");
        err
    })?;

    *orders = load_orders(repo, user)?;
    Ok(())
}
