use super::*;

#[test]
fn task_summary_decodes_a_full_payload() {
    let task: TaskSummary = serde_json::from_value(serde_json::json!({
        "task_id": "t-1",
        "channel_id": "-1003748097480",
        "text": "Клинические рекомендации",
        "scheduled_time": "2024-01-05T10:30:00",
        "status": "scheduled",
        "photo_url": "https://example.org/p.jpg",
        "created_at": "2024-01-04T09:00:00",
        "error_message": null,
        "retry_count": 2
    }))
    .expect("valid task payload");

    assert_eq!(task.task_id, "t-1");
    assert_eq!(task.status, "scheduled");
    assert_eq!(task.photo_url.as_deref(), Some("https://example.org/p.jpg"));
    assert_eq!(task.error_message, None);
    assert_eq!(task.retry_count, 2);
}

#[test]
fn task_summary_tolerates_absent_optionals() {
    let task: TaskSummary = serde_json::from_value(serde_json::json!({
        "task_id": "t-2",
        "channel_id": "@profgynecologist",
        "text": "Пост",
        "scheduled_time": "2024-01-05T10:30:00",
        "status": "pending",
        "created_at": "2024-01-04T09:00:00"
    }))
    .expect("optionals may be absent");

    assert_eq!(task.photo_url, None);
    assert_eq!(task.error_message, None);
    assert_eq!(task.retry_count, 0);
}

#[test]
fn empty_stats_payload_decodes_to_zeros() {
    let stats: TaskStats = serde_json::from_value(serde_json::json!({})).expect("empty stats");
    assert_eq!(stats, TaskStats::default());
    assert_eq!(stats.total, 0);
    assert!(stats.success_rate.abs() < f64::EPSILON);
}

#[test]
fn stats_decode_counters_and_rate() {
    let stats: TaskStats = serde_json::from_value(serde_json::json!({
        "total": 12, "pending": 1, "scheduled": 2, "processing": 0,
        "completed": 8, "failed": 1, "cancelled": 0, "success_rate": 88.9
    }))
    .expect("valid stats payload");

    assert_eq!(stats.total, 12);
    assert_eq!(stats.completed, 8);
    assert!((stats.success_rate - 88.9).abs() < f64::EPSILON);
}

#[test]
fn channel_needs_only_an_id() {
    let channel: Channel =
        serde_json::from_value(serde_json::json!({ "channel_id": "-100123" })).expect("bare channel");
    assert_eq!(channel.channel_id, "-100123");
    assert_eq!(channel.name, None);
    assert_eq!(channel.specialty, None);
}
