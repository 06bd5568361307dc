use chrono::{DateTime, Utc};
use strum::{AsRefStr, EnumString};

use crate::model::{
    auth::Actor,
    id::{BookingId, EventId},
    user::BookingUser,
};

pub mod event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// 予約の所有者本人に許される遷移。pending → cancelled のみ。
    /// 管理者はこの表に縛られない(観測された現行仕様)。
    pub fn owner_may_transition(self, to: BookingStatus) -> bool {
        matches!((self, to), (BookingStatus::Pending, BookingStatus::Cancelled))
    }
}

/// ステータス変更リクエストの可否。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    Allowed,
    /// 他人の予約。存在自体を知らせないので NotFound として扱う
    HiddenFromActor,
    /// 本人の予約だが、遷移表で許されていない組み合わせ
    NotAllowed,
}

#[derive(Debug)]
pub struct Booking {
    pub booking_id: BookingId,
    pub event_id: EventId,
    pub user: BookingUser,
    pub package: PackageSnapshot,
    pub event_date: DateTime<Utc>,
    pub guest_count: i32,
    pub status: BookingStatus,
    pub total_amount: i64,
    pub contact_info: ContactInfo,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// この予約のステータスを actor が status へ変更してよいかを判定する。
    /// 管理者は無条件。一般ユーザーは自分の予約に対する遷移表の範囲だけ。
    pub fn status_change_for(&self, actor: &Actor, to: BookingStatus) -> StatusChange {
        if actor.is_admin() {
            return StatusChange::Allowed;
        }
        if self.user.user_id != actor.id {
            return StatusChange::HiddenFromActor;
        }
        if self.status.owner_may_transition(to) {
            StatusChange::Allowed
        } else {
            StatusChange::NotAllowed
        }
    }
}

/// 予約時点のプラン名と価格の写し。以後イベント側の価格が変わっても
/// この値は再計算しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSnapshot {
    pub name: String,
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub phone: String,
    pub address: String,
    pub special_requirements: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{id::UserId, role::Role};
    use chrono::Utc;

    fn booking_of(owner: UserId, status: BookingStatus) -> Booking {
        Booking {
            booking_id: BookingId::new(),
            event_id: EventId::new(),
            user: BookingUser {
                user_id: owner,
                name: "Test User".into(),
                email: "test@example.com".into(),
            },
            package: PackageSnapshot {
                name: "Gold".into(),
                price: 50000,
            },
            event_date: Utc::now(),
            guest_count: 20,
            status,
            total_amount: 50000,
            contact_info: ContactInfo {
                phone: "03-1234-5678".into(),
                address: "1-2-3 Shibuya, Tokyo".into(),
                special_requirements: None,
            },
            created_at: Utc::now(),
        }
    }

    fn actor(id: UserId, role: Role) -> Actor {
        Actor { id, role }
    }

    #[test]
    fn test_owner_may_cancel_own_pending_booking() {
        let owner = UserId::new();
        let booking = booking_of(owner, BookingStatus::Pending);

        assert_eq!(
            booking.status_change_for(&actor(owner, Role::User), BookingStatus::Cancelled),
            StatusChange::Allowed
        );
    }

    #[test]
    fn test_foreign_booking_is_hidden_not_forbidden() {
        // 他人の予約は、許される遷移であっても存在を知らせない
        let booking = booking_of(UserId::new(), BookingStatus::Pending);
        let stranger = actor(UserId::new(), Role::User);

        assert_eq!(
            booking.status_change_for(&stranger, BookingStatus::Cancelled),
            StatusChange::HiddenFromActor
        );
        assert_eq!(
            booking.status_change_for(&stranger, BookingStatus::Confirmed),
            StatusChange::HiddenFromActor
        );
    }

    #[test]
    fn test_owner_off_table_transition_is_not_allowed() {
        let owner = UserId::new();

        // 自分の予約でも confirm はできない
        let pending = booking_of(owner, BookingStatus::Pending);
        assert_eq!(
            pending.status_change_for(&actor(owner, Role::User), BookingStatus::Confirmed),
            StatusChange::NotAllowed
        );

        // confirmed になった後のキャンセルも本人には許されない
        let confirmed = booking_of(owner, BookingStatus::Confirmed);
        assert_eq!(
            confirmed.status_change_for(&actor(owner, Role::User), BookingStatus::Cancelled),
            StatusChange::NotAllowed
        );
    }

    #[test]
    fn test_admin_is_unrestricted() {
        let admin = actor(UserId::new(), Role::Admin);

        // 他人の予約も、遷移表にない組み合わせも管理者なら通る(現行仕様)
        let cancelled = booking_of(UserId::new(), BookingStatus::Cancelled);
        assert_eq!(
            cancelled.status_change_for(&admin, BookingStatus::Confirmed),
            StatusChange::Allowed
        );
        let confirmed = booking_of(UserId::new(), BookingStatus::Confirmed);
        assert_eq!(
            confirmed.status_change_for(&admin, BookingStatus::Pending),
            StatusChange::Allowed
        );
    }

    #[test]
    fn test_owner_transition_table() {
        use BookingStatus::*;

        assert!(Pending.owner_may_transition(Cancelled));

        assert!(!Pending.owner_may_transition(Confirmed));
        assert!(!Pending.owner_may_transition(Pending));
        assert!(!Confirmed.owner_may_transition(Cancelled));
        assert!(!Cancelled.owner_may_transition(Cancelled));
        assert!(!Cancelled.owner_may_transition(Pending));
    }

    #[test]
    fn test_status_round_trip() {
        use std::str::FromStr;

        assert_eq!(BookingStatus::from_str("pending").unwrap(), BookingStatus::Pending);
        assert_eq!(BookingStatus::Confirmed.as_ref(), "confirmed");
        // completed は表示側だけの値で、状態としては存在しない
        assert!(BookingStatus::from_str("completed").is_err());
    }
}
