//! 예약 상태 전이 규칙
//!
//! ```text
//! CONFIRMED ──► CHECKED_IN ──► CHECKED_OUT ──► PAID
//!     │
//!     └──────► CANCELED
//! ```

use super::entity::reservation::ReservationStatus;
use crate::domain::room::entity::room::RoomStatus;
use crate::utils::error::AppError;

impl ReservationStatus {
    /// 객실을 점유하고 있는 상태 (기간 중복 검사 대상)
    pub fn is_active(self) -> bool {
        matches!(self, ReservationStatus::Confirmed | ReservationStatus::CheckedIn)
    }

    pub fn can_transition_to(self, next: ReservationStatus) -> bool {
        use ReservationStatus::*;

        matches!(
            (self, next),
            (Confirmed, CheckedIn) | (Confirmed, Canceled) | (CheckedIn, CheckedOut) | (CheckedOut, Paid)
        )
    }

    /// 전이가 불가능하면 RESERVATION4001
    pub fn transition_to(self, next: ReservationStatus) -> Result<ReservationStatus, AppError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(AppError::InvalidStatusTransition(format!(
                "{} 상태의 예약은 {} 상태로 변경할 수 없습니다.",
                self.label(),
                next.label()
            )))
        }
    }

    /// 전이에 따라 함께 바뀌어야 하는 객실 상태
    pub fn room_status_after(self) -> Option<RoomStatus> {
        match self {
            ReservationStatus::CheckedIn => Some(RoomStatus::Occupied),
            ReservationStatus::CheckedOut => Some(RoomStatus::Available),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "CONFIRMED",
            ReservationStatus::CheckedIn => "CHECKED_IN",
            ReservationStatus::CheckedOut => "CHECKED_OUT",
            ReservationStatus::Paid => "PAID",
            ReservationStatus::Canceled => "CANCELED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Iterable;
    use ReservationStatus::*;

    #[test]
    fn should_allow_forward_lifecycle() {
        assert!(Confirmed.can_transition_to(CheckedIn));
        assert!(CheckedIn.can_transition_to(CheckedOut));
        assert!(CheckedOut.can_transition_to(Paid));
        assert!(Confirmed.can_transition_to(Canceled));
    }

    #[test]
    fn should_reject_skipping_or_reversing() {
        assert!(!Confirmed.can_transition_to(CheckedOut));
        assert!(!Confirmed.can_transition_to(Paid));
        assert!(!CheckedIn.can_transition_to(Confirmed));
        assert!(!CheckedIn.can_transition_to(Canceled));
        assert!(!CheckedOut.can_transition_to(CheckedIn));
    }

    #[test]
    fn terminal_states_have_no_outgoing_transition() {
        for from in [Paid, Canceled] {
            for to in ReservationStatus::iter() {
                assert!(!from.can_transition_to(to), "{:?} -> {:?}", from, to);
            }
        }
    }

    #[test]
    fn transition_error_carries_code() {
        let err = Canceled.transition_to(CheckedIn).unwrap_err();
        assert_eq!(err.error_code(), "RESERVATION4001");
        assert!(err.message().contains("CANCELED"));
    }

    #[test]
    fn only_confirmed_and_checked_in_are_active() {
        let active: Vec<_> = ReservationStatus::iter().filter(|s| s.is_active()).collect();
        assert_eq!(active, vec![Confirmed, CheckedIn]);
    }

    #[test]
    fn room_follows_check_in_and_check_out() {
        assert_eq!(CheckedIn.room_status_after(), Some(RoomStatus::Occupied));
        assert_eq!(CheckedOut.room_status_after(), Some(RoomStatus::Available));
        assert_eq!(Canceled.room_status_after(), None);
    }
}
