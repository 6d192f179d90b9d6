use super::aggregate::BranchProfile;

fn branch(id: u32, name: &str, cnpj: &str, phone: &str, email: &str, products: u32, logo: &str) -> BranchProfile {
    BranchProfile {
        id,
        name: name.into(),
        cnpj: cnpj.into(),
        phone: phone.into(),
        email: email.into(),
        products,
        logo_placeholder: logo.into(),
    }
}

pub fn mock_branch_profiles() -> Vec<BranchProfile> {
    vec![
        branch(1, "UAI PDV - DEMONSTRACAO", "24.865.243/0001-50", "31", "marcelo@vlks.com.br", 572, "Uai PD"),
        branch(2, "Uaipdv - Shows", "54.884.603/0001-22", "(79) 98521-994", "UaiShow@gmail.com", 1, "Uai PD"),
        branch(3, "UAIPDV- Eventos", "39.106.040/0001-58", "(55) 9876-3251", "UaiEventos@vlks.com.br", 8, "Logo"),
    ]
}
