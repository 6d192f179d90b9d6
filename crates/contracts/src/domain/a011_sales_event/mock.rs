use super::aggregate::SalesEvent;

struct Stock {
    available: u32,
    sold: u32,
    upcoming: bool,
}

fn sales_event(id: u32, name: &str, date: &str, image: Option<&str>, stock: Stock) -> SalesEvent {
    SalesEvent {
        id,
        name: name.into(),
        date: date.into(),
        items_for_sale: vec!["Ingresso".to_string()],
        items_available: stock.available,
        items_sold: stock.sold,
        upcoming: stock.upcoming,
        image_url: image.map(str::to_string),
    }
}

fn stock(available: u32, sold: u32, upcoming: bool) -> Stock {
    Stock {
        available,
        sold,
        upcoming,
    }
}

pub fn mock_admin_sales_events() -> Vec<SalesEvent> {
    vec![
        sales_event(1, "Rock Legends", "27/12/2025", None, stock(50, 3, true)),
        sales_event(2, "Sexta-Feira Country", "07/11/2025", None, stock(30, 2, false)),
        sales_event(3, "teste de lotes", "06/11/2025", None, stock(8, 0, false)),
    ]
}

pub fn mock_client_sales_events() -> Vec<SalesEvent> {
    vec![
        sales_event(
            1,
            "Sexta-Feira Country",
            "04/12/2025",
            Some("https://images.unsplash.com/photo-1501281668745-f7f57925c3b4?auto=format&fit=crop&q=80&w=200"),
            stock(20, 2, true),
        ),
        sales_event(
            2,
            "Sexta-Feira Countrygf",
            "04/12/2025",
            Some("https://images.unsplash.com/photo-1514525253440-b393452e8d26?auto=format&fit=crop&q=80&w=200"),
            stock(10, 1, true),
        ),
        sales_event(
            3,
            "Sexta-Feira Countrygfg",
            "04/12/2025",
            Some("https://images.unsplash.com/photo-1493225255756-d9584f8606e9?auto=format&fit=crop&q=80&w=200"),
            stock(8, 1, true),
        ),
        sales_event(
            4,
            "tgshehe3th",
            "04/12/2025",
            Some("https://images.unsplash.com/photo-1459749411177-287ce3288789?auto=format&fit=crop&q=80&w=200"),
            stock(5, 1, true),
        ),
    ]
}
