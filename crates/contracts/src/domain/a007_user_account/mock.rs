use super::aggregate::{AccountKind, AccountStatus, UserAccount};

#[allow(clippy::too_many_arguments)]
fn account(
    kind: AccountKind,
    id: u32,
    name: &str,
    email: &str,
    status: AccountStatus,
    branches: &[&str],
    contact: &str,
    registered_at: &str,
) -> UserAccount {
    UserAccount {
        id,
        kind,
        name: name.into(),
        email: email.into(),
        status,
        branches: branches.iter().map(|b| b.to_string()).collect(),
        contact: contact.into(),
        registered_at: registered_at.into(),
    }
}

pub fn mock_clients() -> Vec<UserAccount> {
    use AccountKind::Client;
    use AccountStatus::*;
    vec![
        account(
            Client,
            1,
            "Alex",
            "alexssandromercer@gmail.com",
            Ativo,
            &["UAI PDV - DEMONSTRACAO", "Uaipdv - Shows", "Empresa A", "UAIPDV- Eventos"],
            "(47) 99270-5677",
            "27/11/2025",
        ),
        account(Client, 2, "Empresa D", "kalil.fsg@gmail.com", Desativado, &["testando123"], "(31) 99510-2502", "02/12/2025"),
        account(
            Client,
            3,
            "Kalil Felipe Silva Fernandes",
            "kalil.fsf@gmail.com",
            Ativo,
            &["UAI PDV - DEMONSTRACAO", "Empresa B"],
            "(31) 99513-2502",
            "25/10/2025",
        ),
        account(
            Client,
            4,
            "pedro",
            "pedrolucasmota2005@gmail.com",
            Desativado,
            &["UAI PDV - DEMONSTRACAO"],
            "(27) 99517-6920",
            "10/09/2025",
        ),
    ]
}

pub fn mock_staff() -> Vec<UserAccount> {
    vec![account(
        AccountKind::Staff,
        1,
        "Marcelo",
        "marcelo@vlks.com.br",
        AccountStatus::Ativo,
        &[
            "UAI PDV - DEMONSTRACAO",
            "FILIAL DEMONSTRACAO",
            "testando123",
            "Uaipdv - Shows",
            "UAIPDV- Eventos",
        ],
        "(31) 97253-2104",
        "28/10/2025",
    )]
}
