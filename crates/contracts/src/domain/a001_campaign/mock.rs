use super::aggregate::{Campaign, CampaignStatus};

fn campaign(id: u32, name: &str, branch: &str, status: CampaignStatus, date: &str, time: &str) -> Campaign {
    Campaign {
        id,
        name: name.into(),
        branch: branch.into(),
        status,
        posted_date: date.into(),
        posted_time: time.into(),
    }
}

pub fn mock_campaigns() -> Vec<Campaign> {
    use CampaignStatus::*;
    vec![
        campaign(1, "Campanha Desmostração", "UAI PDV - DEMONSTRACAO", Ativa, "26/11/2025", "16:55"),
        campaign(2, "Campanha teste", "Uaipdv - Shows", Ativa, "26/11/2025", "16:44"),
        campaign(3, "Sexta Da Promo", "UAIPDV- Eventos", Ativa, "26/11/2025", "18:00"),
        campaign(4, "Liquidação de Verão", "Matriz São Paulo", Pausada, "25/11/2025", "10:00"),
        campaign(5, "Black Friday Antecipada", "Filial Rio", Rascunho, "24/11/2025", "09:30"),
        campaign(6, "Dia dos Pais", "Todas as Filiais", Finalizada, "10/08/2025", "08:00"),
    ]
}
