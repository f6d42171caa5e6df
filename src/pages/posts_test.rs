use super::*;

fn task(channel: &str) -> TaskSummary {
    TaskSummary {
        task_id: "t-1".to_owned(),
        channel_id: channel.to_owned(),
        text: "Пост".to_owned(),
        scheduled_time: "2024-01-05T10:30:00".to_owned(),
        status: "scheduled".to_owned(),
        photo_url: None,
        created_at: "2024-01-04T09:00:00".to_owned(),
        error_message: None,
        retry_count: 0,
    }
}

#[test]
fn cancel_prompt_names_public_channels() {
    assert_eq!(cancel_prompt(&task("profgynecologist")), "Отменить публикацию в @profgynecologist?");
}

#[test]
fn cancel_prompt_falls_back_for_private_channels() {
    assert_eq!(cancel_prompt(&task("-1003748097480")), "Отменить публикацию в Частный канал?");
}
