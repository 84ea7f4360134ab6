//! Sample shop data used for demos and local development.

use chrono::{NaiveDate, NaiveDateTime};

use barbershop_domain::appointment::Appointment;
use barbershop_domain::barber::Barber;
use barbershop_domain::id::{AppointmentId, BarberId, ServiceId};
use barbershop_domain::service::Service;

fn barber(id: &str, name: &str, image: &str, description: &str, specialties: [&str; 3]) -> Barber {
    Barber {
        id: BarberId::from(id),
        name: name.to_string(),
        image: image.to_string(),
        description: description.to_string(),
        specialties: specialties.iter().map(ToString::to_string).collect(),
    }
}

fn service(id: &str, name: &str, price: f64, duration_minutes: u32, description: &str) -> Service {
    Service {
        id: ServiceId::from(id),
        name: name.to_string(),
        price,
        duration_minutes,
        description: description.to_string(),
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(|date| date.and_hms_opt(hour, 0, 0))
}

/// The three barbers of the demo shop.
#[must_use]
pub fn sample_barbers() -> Vec<Barber> {
    vec![
        barber(
            "b1",
            "Carlos Silva",
            "https://images.unsplash.com/photo-1585747860715-2ba37e788b70?q=80&w=2074&auto=format&fit=crop",
            "Especialista em cortes modernos e barbas estilizadas. Com mais de 10 anos de experiência.",
            ["Corte degradê", "Barba completa", "Navalha"],
        ),
        barber(
            "b2",
            "André Santos",
            "https://images.unsplash.com/photo-1567894340315-735d7c361db0?q=80&w=1974&auto=format&fit=crop",
            "Mestre barbeiro com técnicas precisas em desenhos e acabamentos perfeitos.",
            ["Desenhos", "Corte tesoura", "Sobrancelha"],
        ),
        barber(
            "b3",
            "Marcos Oliveira",
            "https://images.unsplash.com/photo-1622296089861-61a593ee151d?q=80&w=1974&auto=format&fit=crop",
            "Especializado em estilos clássicos e vintage. Traz o melhor da tradição para o presente.",
            ["Pompadour", "Barba vintage", "Hot towel"],
        ),
    ]
}

/// The five services on the demo menu.
#[must_use]
pub fn sample_services() -> Vec<Service> {
    vec![
        service("s1", "Corte Masculino", 60.0, 30, "Corte tradicional com acabamento perfeito"),
        service("s2", "Barba", 40.0, 20, "Modelagem e hidratação da barba"),
        service("s3", "Corte + Barba", 90.0, 50, "Combo completo: corte e barba"),
        service("s4", "Corte Infantil", 45.0, 25, "Para crianças até 12 anos"),
        service("s5", "Sobrancelha", 25.0, 15, "Design e alinhamento da sobrancelha"),
    ]
}

/// Two confirmed bookings so the demo schedule is not empty.
#[must_use]
pub fn sample_appointments() -> Vec<Appointment> {
    let rows = [
        (
            "a1",
            "b1",
            "s1",
            "João Paulo",
            "joao@email.com",
            "(11) 99999-8888",
            at(2025, 5, 1, 14),
        ),
        (
            "a2",
            "b2",
            "s3",
            "Ricardo Mendes",
            "ricardo@email.com",
            "(11) 98888-7777",
            at(2025, 5, 2, 10),
        ),
    ];

    rows.into_iter()
        .filter_map(|(id, barber_id, service_id, name, email, phone, date)| {
            Some(Appointment {
                id: AppointmentId::from(id),
                barber_id: BarberId::from(barber_id),
                service_id: ServiceId::from(service_id),
                client_name: name.to_string(),
                client_email: email.to_string(),
                client_phone: phone.to_string(),
                date: date?,
                confirmed: true,
                completed: false,
                cancelled: false,
            })
        })
        .collect()
}
