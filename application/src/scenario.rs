//! Sample day of a hotel front desk.

use common::{money::Currency, Date, Money};
use rust_decimal::Decimal;
use service::{
    command::{AddRoom, BookRoom, CheckIn, CheckOut, RegisterGuest},
    domain::{guest, reservation::Period, room},
    query::{AvailableRooms, Occupancy},
    read::occupancy::Report,
    Command as _,
};
use tracing as log;

use crate::{report::Rendered, Service};

/// Rooms of the sample hotel: number, category and nightly rate.
const ROOMS: &[(u32, &str, u32)] = &[
    (101, "single", 80),
    (102, "double", 120),
    (201, "suite", 200),
    (202, "double", 120),
];

/// Guests of the sample hotel: name, email and phone.
const GUESTS: &[(&str, &str, &str)] = &[
    ("María García", "maria@email.com", "555-0001"),
    ("Carlos López", "carlos@email.com", "555-0002"),
];

/// Rooms booked by the [`GUESTS`], in the same order.
const BOOKINGS: &[u32] = &[101, 201];

/// Runs the sample day starting on the provided `today` and returns the
/// final occupancy [`Report`].
///
/// Failed front desk operations are logged and skipped. Both occupancy
/// reports are printed to stdout.
///
/// # Errors
///
/// Errors if the sample data is malformed or an occupancy [`Report`] cannot
/// be made. The reason is logged.
pub async fn run(
    service: &Service,
    hotel: &str,
    currency: Currency,
    today: Date,
) -> Result<Report, ()> {
    for &(number, category, rate) in ROOMS {
        let cmd = AddRoom {
            number: room::Number::from(number),
            category: room::Category::new(category).ok_or_else(|| {
                log::error!("`{category}` is not a valid room category");
            })?,
            rate: room::Rate::new(Money {
                amount: Decimal::from(rate),
                currency,
            })
            .ok_or_else(|| log::error!("`{rate}` is not a valid room rate"))?,
        };
        if let Err(e) = service.execute(cmd).await {
            log::warn!("failed to add room {number}: {e}");
        }
    }

    let mut guests = Vec::with_capacity(GUESTS.len());
    for &(name, email, phone) in GUESTS {
        let cmd = RegisterGuest {
            name: guest::Name::new(name)
                .ok_or_else(|| log::error!("`{name}` is not a valid name"))?,
            email: guest::Email::new(email)
                .ok_or_else(|| log::error!("`{email}` is not a valid email"))?,
            phone: guest::Phone::new(phone)
                .ok_or_else(|| log::error!("`{phone}` is not a valid phone"))?,
        };
        match service.execute(cmd).await {
            Ok(g) => guests.push(g),
            Err(e) => log::warn!("failed to register guest {name}: {e}"),
        }
    }

    let arrival = today.checked_add_days(1);
    let departure = today.checked_add_days(4);
    let (Some(arrival), Some(departure)) = (arrival, departure) else {
        log::error!("no calendar dates after {today}");
        return Err(());
    };
    let period = Period::new(arrival.coerce(), departure.coerce())
        .ok_or_else(|| log::error!("empty stay {arrival}..{departure}"))?;

    match service
        .execute(AvailableRooms {
            period,
            category: None,
        })
        .await
    {
        Ok(rooms) => {
            log::info!("rooms available from {arrival} to {departure}:");
            for r in rooms {
                log::info!(
                    "  room {} ({}) at {}/night",
                    r.number,
                    r.category,
                    r.rate,
                );
            }
        }
        Err(e) => log::warn!("failed to search available rooms: {e}"),
    }

    for (g, &number) in guests.iter().zip(BOOKINGS) {
        let cmd = BookRoom {
            guest_id: g.id,
            room_number: room::Number::from(number),
            period,
        };
        if let Err(e) = service.execute(cmd).await {
            log::warn!("failed to book room {number} for {}: {e}", g.name);
        }
    }

    // Guests arrive the next day.
    for &number in BOOKINGS {
        let cmd = CheckIn {
            room_number: room::Number::from(number),
            date: arrival,
        };
        if let Err(e) = service.execute(cmd).await {
            log::warn!("failed to check in room {number}: {e}");
        }
    }

    let report = occupancy(service, arrival).await?;
    println!("{}", Rendered { hotel, report: &report });

    for &number in BOOKINGS {
        let cmd = CheckOut {
            room_number: room::Number::from(number),
        };
        if let Err(e) = service.execute(cmd).await {
            log::warn!("failed to check out room {number}: {e}");
        }
    }

    let report = occupancy(service, arrival).await?;
    println!("{}", Rendered { hotel, report: &report });

    Ok(report)
}

/// Makes an occupancy [`Report`] on the provided `date`.
async fn occupancy(service: &Service, date: Date) -> Result<Report, ()> {
    service
        .execute(Occupancy { date })
        .await
        .map_err(|e| log::error!("failed to make occupancy report: {e}"))
}
