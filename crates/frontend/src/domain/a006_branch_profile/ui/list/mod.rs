use contracts::domain::a006_branch_profile::mock::mock_branch_profiles;
use contracts::domain::a006_branch_profile::BranchProfile;
use contracts::shared::list::ListPage;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_scaffold::ListScaffold;
use crate::shared::components::page_header::PageHeader;
use crate::shared::list_utils::{highlight_matches, ListState};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
#[allow(non_snake_case)]
pub fn BranchProfileList() -> impl IntoView {
    let list = ListState::new(mock_branch_profiles());

    view! {
        <PageFrame page_id="a006_branch_profile--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Gestão de Filiais"
                subtitle="Gerencie todas as suas filiais cadastradas."
                icon_name="fa-store"
            >
                <Button appearance=ButtonAppearance::Primary>
                    <i class="fa-solid fa-plus" aria-hidden="true"></i>
                    " Nova Filial"
                </Button>
            </PageHeader>

            <ListScaffold
                list=list
                search_placeholder="Buscar por nome ou CNPJ..."
                render={move |page: ListPage<BranchProfile>| {
                    let term = list.search();
                    view! {
                        <div class="card-grid">
                            {page.items.into_iter().map(|branch| view! {
                                <div class="branch-card">
                                    <div class="branch-card__header">
                                        <div class="branch-card__logo">{branch.logo_placeholder.clone()}</div>
                                        <div class="cell-stack">
                                            <strong>{highlight_matches(&branch.name, &term)}</strong>
                                            <span class="text-muted">
                                                "CNPJ: "{highlight_matches(&branch.cnpj, &term)}
                                            </span>
                                        </div>
                                    </div>
                                    <div class="branch-card__contacts">
                                        <div>
                                            <i class="fa-solid fa-phone" aria-hidden="true"></i>
                                            {format!(" {}", branch.phone)}
                                        </div>
                                        <div>
                                            <i class="fa-solid fa-envelope" aria-hidden="true"></i>
                                            {format!(" {}", branch.email)}
                                        </div>
                                    </div>
                                    <div class="branch-card__footer">
                                        <span>{format!("{} produtos", branch.products)}</span>
                                        <Button appearance=ButtonAppearance::Subtle>"Editar"</Button>
                                    </div>
                                </div>
                            }).collect_view()}
                        </div>
                    }
                }}
            />
        </PageFrame>
    }
}
