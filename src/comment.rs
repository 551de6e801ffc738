//! Defines the guestbook [`Comment`] type. Top-level comments carry a
//! `floor` for display ordering; replies are nested one level deep and
//! share their parent's floor (an observed property of the data, checked
//! by the store tests rather than enforced by the types).

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// The guestbook timestamps use minute precision with a space separator
/// (`2024-03-21 12:30`), which chrono's serde impl doesn't accept, so we
/// parse them by hand.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn deserialize_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let s = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&s, TIME_FORMAT).map_err(D::Error::custom)
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub floor: u32,
    pub nickname: String,
    pub avatar: String,
    pub content: String,

    #[serde(deserialize_with = "deserialize_time")]
    pub time: NaiveDateTime,

    pub likes: u32,
    pub image: Option<String>,
    pub replies: Option<Vec<Comment>>,
    pub is_liked: Option<bool>,
}

impl Comment {
    /// The nested replies, or an empty slice when the field is absent.
    /// Absent and empty are distinct in the source data but read the same
    /// way.
    pub fn replies(&self) -> &[Comment] {
        match &self.replies {
            Some(replies) => replies,
            None => &[],
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    const COMMENT: &str = "
id: 2
floor: 2
nickname: 奶茶君
avatar: /avatars/avatar2.jpg
content: 春天来了，万物复苏，新的一年也要充满希望！🌸
time: '2024-03-21 14:15'
likes: 8
image: /background/gqj.jpg
replies:
  - id: 21
    floor: 2
    nickname: 小太阳
    avatar: /avatars/avatar3.jpg
    content: 是的呢，春天真好！
    time: '2024-03-21 14:20'
    likes: 0
";

    #[test]
    fn test_parse_comment() -> Result<(), serde_yaml::Error> {
        let comment: Comment = serde_yaml::from_str(COMMENT)?;
        assert_eq!(
            comment.time,
            NaiveDate::from_ymd(2024, 3, 21).and_hms(14, 15, 0)
        );
        assert_eq!(comment.replies().len(), 1);
        assert_eq!(comment.replies()[0].floor, comment.floor);
        assert_eq!(comment.is_liked, None);
        Ok(())
    }

    #[test]
    fn test_absent_replies_read_as_empty() -> Result<(), serde_yaml::Error> {
        let comment: Comment = serde_yaml::from_str(
            "
id: 3
floor: 3
nickname: 程序猿
avatar: /avatars/avatar4.jpg
content: 代码写不完了，但是还是要保持乐观！💪
time: '2024-03-21 15:45'
likes: 15
",
        )?;
        assert_eq!(comment.replies, None);
        assert!(comment.replies().is_empty());
        Ok(())
    }

    #[test]
    fn test_rejects_second_precision_mismatch() {
        // Seconds are not part of the guestbook format.
        let result: Result<Comment, _> = serde_yaml::from_str(
            "
id: 1
floor: 1
nickname: 小猫咪
avatar: /avatars/avatar1.jpg
content: hi
time: '2024-03-21T12:30:00'
likes: 0
",
        );
        assert!(result.is_err());
    }
}
