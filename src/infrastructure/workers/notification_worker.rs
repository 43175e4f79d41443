use std::time::Duration;

use log::{error, info};
use tokio::time::sleep;

use crate::domain::mailer::Mailer;
use crate::domain::notification::Notification;
use crate::domain::queue::Queue;
use crate::use_cases::send_notification::SendNotificationUseCase;

/// Consumes the notification queue and executes the email jobs, one at a
/// time. A failed job is re-queued; delivery order across re-queues is not
/// guaranteed.
pub async fn notification_worker<Q, M>(
	queue: Q,
	send_notification_use_case: SendNotificationUseCase<M>,
) where
	Q: Queue<Notification> + Clone + Send + Sync + 'static,
	M: Mailer + Clone + Send + Sync + 'static,
{
	loop {
		let message = match queue.pop().await {
			Ok(Some(val)) => val,
			Ok(None) => {
				sleep(Duration::from_secs(1)).await;
				continue;
			}
			Err(e) => {
				error!("Failed to pop from notifications queue: {e}");
				sleep(Duration::from_secs(1)).await;
				continue;
			}
		};

		let message_id = message.id;

		info!("Started processing notification '{}'", &message_id);

		match send_notification_use_case.execute(message.body.clone()).await {
			Ok(confirmation) => {
				info!("Notification '{}' done: {}", &message_id, confirmation);
			}
			Err(e) => {
				error!("Failed to process notification '{}': {e}", &message_id);
				if let Err(e) = queue.push(message).await {
					error!("Failed to re-queue notification: {e}");
				}
			}
		}
	}
}
