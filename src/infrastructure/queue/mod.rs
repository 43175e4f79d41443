pub mod redis_notification_queue;
