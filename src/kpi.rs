//! Dashboard counters over a page of scheduled services.

use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::datetime::calendar_day_in;
use crate::models::{Service, ServiceStatus};

/// The four dashboard counters.
///
/// `scheduled_today` is a subset of `upcoming`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardKpis {
    pub scheduled_today: u32,
    pub upcoming: u32,
    pub completed: u32,
    pub cancelled: u32,
}

/// Count services by status, using `tz` to place scheduled dates on the calendar.
///
/// Statuses outside the closed set count nowhere. A scheduled date that does
/// not parse never matches `today` but still counts as upcoming.
pub fn aggregate_in<Tz: TimeZone>(services: &[Service], today: NaiveDate, tz: &Tz) -> DashboardKpis {
    let mut kpis = DashboardKpis::default();

    for service in services {
        match service.status() {
            Some(ServiceStatus::Scheduled) => {
                kpis.upcoming += 1;
                if calendar_day_in(&service.scheduled_date, tz) == Some(today) {
                    kpis.scheduled_today += 1;
                }
            }
            Some(ServiceStatus::Completed) => kpis.completed += 1,
            Some(ServiceStatus::Cancelled) => kpis.cancelled += 1,
            None => {}
        }
    }

    kpis
}

/// [`aggregate_in`] on the local calendar.
pub fn aggregate(services: &[Service], today: NaiveDate) -> DashboardKpis {
    aggregate_in(services, today, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn make_service(status: &str, scheduled_date: &str) -> Service {
        Service {
            raw_status: status.into(),
            scheduled_date: scheduled_date.into(),
            service_type: "Consulta".into(),
            ..Default::default()
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_input_is_all_zero() {
        assert_eq!(aggregate(&[], day(2024, 3, 5)), DashboardKpis::default());
    }

    #[test]
    fn mixed_statuses() {
        let services = vec![
            make_service("Agendado", "2024-03-05"),
            make_service("Agendado", "2024-03-06"),
            make_service("Concluído", "2024-03-01T10:00:00"),
            make_service("Cancelado", "2024-03-02T10:00:00"),
        ];
        assert_eq!(
            aggregate(&services, day(2024, 3, 5)),
            DashboardKpis {
                scheduled_today: 1,
                upcoming: 2,
                completed: 1,
                cancelled: 1,
            }
        );
    }

    #[test]
    fn timestamps_match_by_local_day() {
        let services = vec![
            make_service("Agendado", "2024-03-05T00:00:00"),
            make_service("Agendado", "2024-03-05T23:59:59"),
            make_service("Agendado", "2024-03-05 14:30:00"),
        ];
        let kpis = aggregate(&services, day(2024, 3, 5));
        assert_eq!(kpis.scheduled_today, 3);
        assert_eq!(kpis.upcoming, 3);
    }

    #[test]
    fn offset_timestamps_use_target_zone_day() {
        let brt = FixedOffset::west_opt(3 * 3600).unwrap();
        let services = vec![make_service("Agendado", "2024-03-06T01:00:00Z")];

        assert_eq!(aggregate_in(&services, day(2024, 3, 5), &brt).scheduled_today, 1);
        assert_eq!(aggregate_in(&services, day(2024, 3, 6), &brt).scheduled_today, 0);
    }

    #[test]
    fn unknown_status_counts_nowhere() {
        let services = vec![
            make_service("Remarcado", "2024-03-05"),
            make_service("", "2024-03-05"),
        ];
        assert_eq!(aggregate(&services, day(2024, 3, 5)), DashboardKpis::default());
    }

    #[test]
    fn unparsable_date_is_upcoming_but_not_today() {
        let services = vec![make_service("Agendado", "sem data")];
        let kpis = aggregate(&services, day(2024, 3, 5));
        assert_eq!(kpis.upcoming, 1);
        assert_eq!(kpis.scheduled_today, 0);
    }

    #[test]
    fn order_independent() {
        let mut services = vec![
            make_service("Agendado", "2024-03-05T09:00:00"),
            make_service("Cancelado", "2024-03-05T09:00:00"),
            make_service("Agendado", "2024-03-07"),
            make_service("Concluído", "2024-03-04"),
            make_service("Agendado", "2024-03-05"),
        ];
        let today = day(2024, 3, 5);
        let forward = aggregate(&services, today);
        services.reverse();
        assert_eq!(aggregate(&services, today), forward);
        services.rotate_left(2);
        assert_eq!(aggregate(&services, today), forward);
    }

    #[test]
    fn scheduled_today_never_exceeds_upcoming() {
        let today = day(2024, 3, 5);
        let services: Vec<Service> = ["2024-03-05", "2024-03-05T10:00:00", "x", "2024-03-09"]
            .iter()
            .map(|d| make_service("Agendado", d))
            .collect();
        let kpis = aggregate(&services, today);
        assert!(kpis.scheduled_today <= kpis.upcoming);
        assert_eq!(kpis.scheduled_today, 2);
    }
}
