use super::aggregate::{Invite, InviteStatus};

#[allow(clippy::too_many_arguments)]
fn invite(
    id: u32,
    client_name: &str,
    client_email: &str,
    guests: u32,
    event_name: &str,
    status: InviteStatus,
    date: &str,
    time: &str,
) -> Invite {
    Invite {
        id,
        client_name: client_name.into(),
        client_email: client_email.into(),
        guests,
        event_name: event_name.into(),
        status,
        created_date: date.into(),
        created_time: time.into(),
    }
}

pub fn mock_invites() -> Vec<Invite> {
    use InviteStatus::*;
    vec![
        invite(1, "Alex", "alexssandromercer@gmail.com", 3, "Rock Legends", Desativado, "01/12/2025", "14:48"),
        invite(2, "Alex", "alexssandromercer@gmail.com", 5, "Rock Legends", Ativo, "01/12/2025", "14:36"),
        invite(3, "Mariana Silva", "mariana.silva@email.com", 2, "Festival de Verão", Ativo, "30/11/2025", "10:00"),
        invite(4, "João Souza", "joao.souza@email.com", 1, "Sexta-Feira Country", Ativo, "29/11/2025", "09:15"),
        invite(5, "Fernanda Costa", "fernanda.costa@email.com", 4, "Rock Legends", Ativo, "28/11/2025", "16:20"),
        invite(6, "Carlos Oliveira", "carlos.oliveira@email.com", 2, "Noite de Gala", Desativado, "27/11/2025", "11:30"),
    ]
}
