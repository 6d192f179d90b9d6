use super::aggregate::GuestList;

fn list(id: u32, event: &str, group: &str, quantity: u32, date: &str, time: &str) -> GuestList {
    GuestList {
        id,
        event: event.into(),
        group: group.into(),
        quantity,
        created_date: date.into(),
        created_time: time.into(),
    }
}

pub fn mock_guest_lists() -> Vec<GuestList> {
    vec![
        list(1, "Rock Legends", "Familia", 3, "01/12/2025", "14:48"),
        list(2, "Rock Legends", "VIPs", 2, "01/12/2025", "14:36"),
        list(3, "Festival de Verão", "Promoters", 15, "30/11/2025", "09:12"),
        list(4, "Noite de Gala", "Imprensa", 5, "28/11/2025", "16:20"),
        list(5, "Sexta-Feira Country", "Sócios", 50, "25/11/2025", "10:00"),
        list(6, "Rock Legends", "Amigos", 8, "24/11/2025", "11:30"),
        list(7, "Festival de Verão", "Patrocinadores", 10, "23/11/2025", "14:15"),
        list(8, "Noite de Gala", "Influencers", 12, "22/11/2025", "18:45"),
        list(9, "Sexta-Feira Country", "Funcionários", 20, "21/11/2025", "09:00"),
        list(10, "Rock Legends", "Camarote", 4, "20/11/2025", "13:20"),
        list(11, "Festival de Verão", "Pista", 100, "19/11/2025", "10:10"),
        list(12, "Noite de Gala", "Diretoria", 6, "18/11/2025", "15:55"),
    ]
}
