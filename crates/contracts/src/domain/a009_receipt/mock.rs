use super::aggregate::{GiftReceipt, ReceiptStatus, TicketReceipt};

const CLIENT_NAME: &str = "Alex";
const CLIENT_EMAIL: &str = "alexssandromercer@gmail.com";

fn ticket(id: u32, status: ReceiptStatus, date: &str, code: &str, tickets: u32, total_cents: i64) -> TicketReceipt {
    TicketReceipt {
        id,
        client_name: CLIENT_NAME.into(),
        client_email: CLIENT_EMAIL.into(),
        status,
        order_date: date.into(),
        code: code.into(),
        tickets,
        total_cents,
    }
}

pub fn mock_ticket_receipts() -> Vec<TicketReceipt> {
    use ReceiptStatus::*;
    vec![
        ticket(1, Aprovado, "01/12/2025", "16", 1, 3_000),
        ticket(2, Aprovado, "25/11/2025", "12", 2, 6_000),
        ticket(3, Cancelado, "10/11/2025", "8", 1, 3_000),
    ]
}

fn gift(id: u32, status: ReceiptStatus, event: &str, date: &str, code: &str, items: u32, total_cents: i64) -> GiftReceipt {
    GiftReceipt {
        id,
        client_name: CLIENT_NAME.into(),
        client_email: CLIENT_EMAIL.into(),
        status,
        event_name: event.into(),
        order_date: date.into(),
        code: code.into(),
        items,
        total_cents,
    }
}

pub fn mock_gift_receipts() -> Vec<GiftReceipt> {
    use ReceiptStatus::*;
    vec![
        gift(1, Aprovado, "Rock Legends", "01/12/2025", "9", 1, 2_999),
        gift(2, Pendente, "Festival de Verão", "15/12/2025", "14", 3, 8_990),
        gift(3, Cancelado, "Show Acústico", "20/11/2025", "5", 1, 2_500),
    ]
}
