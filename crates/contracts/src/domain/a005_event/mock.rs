use super::aggregate::{EventStatus, ManagedEvent, PublicEvent};

fn public(id: u32, title: &str, category: &str, date: &str, time: &str, image: Option<&str>) -> PublicEvent {
    PublicEvent {
        id,
        title: title.into(),
        category: category.into(),
        date: date.into(),
        time: time.into(),
        image_url: image.map(str::to_string),
    }
}

pub fn mock_public_events() -> Vec<PublicEvent> {
    vec![
        public(1, "Festa Havaina", "Aniversário", "29 nov. 2025", "15:00", None),
        public(
            2,
            "Sexta-Feira Country",
            "Aniversário",
            "07 nov. 2025",
            "15:54",
            Some("https://images.unsplash.com/photo-1516450360452-9312f5e86fc7?auto=format&fit=crop&q=80&w=800"),
        ),
        public(
            3,
            "teste de lotes",
            "Encontro, Networking",
            "06 nov. 2025",
            "16:57",
            Some("https://images.unsplash.com/photo-1477959858617-67f85cf4f1df?auto=format&fit=crop&q=80&w=800"),
        ),
        public(4, "As Aventuras de Mike - O Hotel Assombrado", "Aniversário", "06 dez. 2025", "14:30", None),
        public(5, "BASSZONE FESTIVAL", "Aniversário", "29 nov. 2025", "22:00", None),
        public(6, "BASSZONE FESTIVAL", "Aniversário", "29 nov. 2025", "22:00", None),
        public(
            7,
            "Teste 1.0",
            "Educação",
            "21 nov. 2025",
            "15:31",
            Some("https://images.unsplash.com/photo-1557804506-669a67965ba0?auto=format&fit=crop&q=80&w=800"),
        ),
        public(8, "Rock Legends", "Aniversário", "27 dez. 2025", "20:00", None),
        public(
            9,
            "Sexta-Feira Countrygf",
            "E-Sports",
            "04 dez. 2025",
            "16:36",
            Some("https://images.unsplash.com/photo-1542751371-adc38448a05e?auto=format&fit=crop&q=80&w=800"),
        ),
        public(
            10,
            "Sexta-Feira Countrygfg",
            "Familia e Educação",
            "04 dez. 2025",
            "17:24",
            Some("https://images.unsplash.com/photo-1511882150382-421056c89033?auto=format&fit=crop&q=80&w=800"),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn managed(
    id: u32,
    title: &str,
    (date_start, date_end): (&str, &str),
    status: EventStatus,
    category: &str,
    venue_type: &str,
    description: &str,
    tickets_sold: u32,
) -> ManagedEvent {
    ManagedEvent {
        id,
        title: title.into(),
        date_start: date_start.into(),
        date_end: date_end.into(),
        status,
        category: category.into(),
        venue_type: venue_type.into(),
        description: description.into(),
        tickets_sold,
    }
}

/// Events of the demo administrator account.
pub fn mock_admin_events() -> Vec<ManagedEvent> {
    use EventStatus::*;
    vec![
        managed(
            1,
            "Rock Legends",
            ("27/12/2025", "28/12/2025"),
            Ativo,
            "Aniversário",
            "Bar/Pub",
            "O espetáculo Rock Legends - com Edu Curti, Banda & Orquestra - é a homenagem absoluta às m...",
            620,
        ),
        managed(
            2,
            "Sexta-Feira Country",
            ("07/11/2025", "07/11/2025"),
            Ativo,
            "Aniversário",
            "Auditório/Sala de Conferência",
            "ghdfgdgdfgdfgdfgd",
            410,
        ),
        managed(
            3,
            "teste de lotes",
            ("06/11/2025", "22/11/2025"),
            Ativo,
            "Encontro, Networking",
            "Hotel Fazenda",
            "gsdfgdgdgdf",
            210,
        ),
    ]
}

/// Events of the demo client account.
pub fn mock_client_events() -> Vec<ManagedEvent> {
    use EventStatus::*;
    vec![
        managed(
            1,
            "Rock Legends",
            ("27/12/2025", "28/12/2025"),
            Ativo,
            "Aniversário",
            "Bar/Pub",
            "O espetáculo Rock Legends - com Edu Curti, Banda & Orquestra - é a homenagem absoluta às maiores lendas do Rock.",
            620,
        ),
        managed(
            2,
            "Sexta-Feira Country",
            ("07/11/2025", "07/11/2025"),
            Ativo,
            "Aniversário",
            "Auditório/Sala de Conferência",
            "A melhor sexta-feira sertaneja da região com as melhores duplas e open bar completo.",
            410,
        ),
        managed(
            3,
            "Teste de Lotes",
            ("06/11/2025", "22/11/2025"),
            Ativo,
            "Encontro, Networking",
            "Hotel Fazenda",
            "Evento exclusivo para testes de virada de lote e configurações avançadas de ingressos.",
            210,
        ),
        managed(
            4,
            "Festival de Verão",
            ("15/01/2026", "16/01/2026"),
            Rascunho,
            "Show",
            "Estádio",
            "O maior festival de verão da cidade está de volta com atrações nacionais e internacionais.",
            0,
        ),
        managed(
            5,
            "Workshop de Tecnologia",
            ("10/02/2026", "10/02/2026"),
            Finalizado,
            "Workshop",
            "Centro de Convenções",
            "Um dia imersivo com os maiores nomes da tecnologia e inovação do mercado.",
            0,
        ),
    ]
}
