use common::DashboardStats;
use model::entities::order::{self, OrderStatus};
use tracing::{debug, instrument};

/// Fold orders into dashboard figures. An empty book yields all zeros.
#[instrument(skip(orders))]
pub fn summarize<'a, I>(orders: I) -> DashboardStats
where
    I: IntoIterator<Item = &'a order::Model>,
{
    let stats = orders
        .into_iter()
        .fold(DashboardStats::default(), |mut stats, order| {
            stats.total_orders += 1;
            stats.total_revenue += order.price;
            match order.status {
                OrderStatus::New => stats.new_count += 1,
                OrderStatus::InWork => stats.in_work_count += 1,
                OrderStatus::Production => stats.production_count += 1,
                OrderStatus::Done => stats.done_count += 1,
            }
            stats
        });

    debug!(
        total_orders = stats.total_orders,
        total_revenue = %stats.total_revenue,
        "Dashboard summarized"
    );
    stats
}
