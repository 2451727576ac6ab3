pub mod greeting;
pub mod storage_notification;
pub mod upstream_result;
