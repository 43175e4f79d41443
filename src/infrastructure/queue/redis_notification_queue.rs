use async_trait::async_trait;
use redis::{AsyncCommands, Client};

use crate::domain::notification::Notification;
use crate::domain::queue::{Message, Queue};
use crate::infrastructure::config::redis::NOTIFICATIONS_QUEUE_KEY;

#[derive(Clone)]
pub struct NotificationQueue {
	client: Client,
}

impl NotificationQueue {
	pub fn new(client: Client) -> Self {
		Self { client }
	}
}

#[async_trait]
impl Queue<Notification> for NotificationQueue {
	async fn pop(
		&self,
	) -> Result<Option<Message<Notification>>, Box<dyn std::error::Error + Send>>
	{
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let popped_value: Option<(String, String)> = con
			.brpop(NOTIFICATIONS_QUEUE_KEY, 1.0)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let message_str =
			if let Some((_queue_name, serialized_message)) = popped_value {
				serialized_message
			} else {
				return Ok(None);
			};

		let message: Message<Notification> = serde_json::from_str(&message_str)
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		Ok(Some(message))
	}

	async fn push(
		&self,
		message: Message<Notification>,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		let mut con = self
			.client
			.get_multiplexed_async_connection()
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let serialized_message = serde_json::to_string(&message)
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;

		let _: () = con
			.lpush(NOTIFICATIONS_QUEUE_KEY, serialized_message)
			.await
			.map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send>)?;
		Ok(())
	}
}
