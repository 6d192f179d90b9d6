use serde::{Deserialize, Serialize};

/// Access role of the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    Gerente,
    Funcionario,
    Cliente,
    Guest,
}

impl UserRole {
    pub const ALL: [UserRole; 5] = [
        UserRole::Admin,
        UserRole::Gerente,
        UserRole::Funcionario,
        UserRole::Cliente,
        UserRole::Guest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Gerente => "GERENTE",
            UserRole::Funcionario => "FUNCIONARIO",
            UserRole::Cliente => "CLIENTE",
            UserRole::Guest => "GUEST",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrador",
            UserRole::Gerente => "Gerente",
            UserRole::Funcionario => "Funcionário",
            UserRole::Cliente => "Cliente",
            UserRole::Guest => "Visitante",
        }
    }

    /// Branch a freshly signed-in user of this role is bound to.
    pub fn default_branch_id(&self) -> Option<u32> {
        match self {
            UserRole::Admin => Some(1),
            _ => None,
        }
    }
}

/// Organizational sub-unit ("filial") a session can work on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Branch {
    pub id: u32,
    pub name: &'static str,
    pub cnpj: &'static str,
    pub address: &'static str,
}

const BRANCHES: [Branch; 2] = [
    Branch {
        id: 1,
        name: "Matriz São Paulo",
        cnpj: "00.000.000/0001-00",
        address: "Av Paulista 1000",
    },
    Branch {
        id: 2,
        name: "Filial Rio",
        cnpj: "00.000.000/0002-00",
        address: "Av Atlantica 500",
    },
];

/// Fixed list of branches a session may switch between.
pub fn reference_branches() -> &'static [Branch] {
    &BRANCHES
}

pub fn find_branch(id: u32) -> Option<&'static Branch> {
    BRANCHES.iter().find(|b| b.id == id)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub branch_id: Option<u32>,
}

impl UserInfo {
    /// Stand-in user for a role; there is no credential check.
    pub fn simulated(role: UserRole) -> Self {
        let name = if role == UserRole::Admin {
            "Administrador Papi"
        } else {
            "Cliente Feliz"
        };
        Self {
            id: 123,
            name: name.to_string(),
            email: "user@papifast.com".to_string(),
            role,
            branch_id: role.default_branch_id(),
        }
    }

    /// Up to two uppercase initials for the avatar bubble.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_users() {
        let admin = UserInfo::simulated(UserRole::Admin);
        assert_eq!(admin.name, "Administrador Papi");
        assert_eq!(admin.branch_id, Some(1));
        assert_eq!(admin.initials(), "AP");

        let client = UserInfo::simulated(UserRole::Cliente);
        assert_eq!(client.name, "Cliente Feliz");
        assert_eq!(client.branch_id, None);

        assert_eq!(UserInfo::simulated(UserRole::Gerente).branch_id, None);
    }

    #[test]
    fn test_branch_lookup() {
        assert_eq!(reference_branches().len(), 2);
        assert_eq!(find_branch(2).map(|b| b.name), Some("Filial Rio"));
        assert!(find_branch(99).is_none());
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&UserRole::Cliente).unwrap(), "\"CLIENTE\"");
        for role in UserRole::ALL {
            let json = format!("\"{}\"", role.as_str());
            assert_eq!(serde_json::from_str::<UserRole>(&json).unwrap(), role);
        }
    }
}
