use leptos::prelude::*;
use thaw::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SyncScope {
    Partial,
    Full,
}

impl SyncScope {
    fn label(self) -> &'static str {
        match self {
            SyncScope::Partial => "Sincronia Parcial",
            SyncScope::Full => "Sincronizar Tudo",
        }
    }
}

/// Data import from the point-of-sale system. No transport exists yet, so a
/// request only records what was asked for.
#[component]
pub fn SyncPage() -> impl IntoView {
    let (last_request, set_last_request) = signal(Option::<SyncScope>::None);

    let request = move |scope: SyncScope| {
        log::info!("sync requested: {:?}", scope);
        set_last_request.set(Some(scope));
    };

    view! {
        <PageFrame page_id="sys_sync--page" category=PAGE_CAT_SYSTEM>
            <PageHeader
                title="Sincronização de Dados UAIPDV"
                subtitle="Importe e atualize seus dados do UAIPDV para a plataforma web"
                icon_name="fa-rotate"
            >
                ""
            </PageHeader>

            <div class="card sync-card">
                <span class="badge badge--primary">
                    <i class="fa-solid fa-circle-info" aria-hidden="true"></i>
                    " Sincronize seus dados"
                </span>
                <p class="text-muted">
                    "Traga seus dados (Filiais, produtos, categorias, preços e modificadores) gerenciados no UAIPDV para a plataforma web de forma rápida e segura."
                </p>
                <i class="fa-solid fa-cloud sync-card__cloud" aria-hidden="true"></i>

                <Flex gap=FlexGap::Medium>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| request(SyncScope::Partial)>
                        <i class="fa-solid fa-rotate" aria-hidden="true"></i>
                        " Sincronia Parcial"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| request(SyncScope::Full)>
                        <i class="fa-solid fa-rotate-right" aria-hidden="true"></i>
                        " Sincronizar Tudo"
                    </Button>
                </Flex>

                {move || last_request.get().map(|scope| view! {
                    <div class="info-box">{format!("{} solicitada.", scope.label())}</div>
                })}
            </div>
        </PageFrame>
    }
}
