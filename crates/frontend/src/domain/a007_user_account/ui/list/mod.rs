use contracts::domain::a007_user_account::mock::{mock_clients, mock_staff};
use contracts::domain::a007_user_account::UserAccount;
use contracts::shared::list::ListPage;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_scaffold::ListScaffold;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::list_utils::{highlight_matches, ListState};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Clients or staff of the branch; both share one record type.
#[component]
#[allow(non_snake_case)]
pub fn UserAccountList(#[prop(optional)] staff: bool) -> impl IntoView {
    let (records, title, page_id) = if staff {
        (mock_staff(), "Gestão de Funcionários", "a007_user_account--staff")
    } else {
        (mock_clients(), "Gestão de Clientes", "a007_user_account--clients")
    };
    let list = ListState::new(records);

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <PageHeader
                title=title
                subtitle="Gerencie e visualize os clientes da sua filial."
                icon_name=if staff { "fa-user-tie" } else { "fa-users" }
            >
                <Button appearance=ButtonAppearance::Primary>
                    <i class="fa-solid fa-user-plus" aria-hidden="true"></i>
                    {if staff { " Novo Funcionário" } else { " Novo Cliente" }}
                </Button>
            </PageHeader>

            <ListScaffold
                list=list
                search_placeholder="Buscar por nome, email ou contato..."
                render={move |page: ListPage<UserAccount>| {
                    let term = list.search();
                    view! {
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Nome"</TableHeaderCell>
                                    <TableHeaderCell>"Contato"</TableHeaderCell>
                                    <TableHeaderCell>"Filiais"</TableHeaderCell>
                                    <TableHeaderCell>"Cadastro"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {page.items.into_iter().map(|account| {
                                    let name_view = highlight_matches(&account.name, &term);
                                    let email_view = highlight_matches(&account.email, &term);
                                    let contact_view = highlight_matches(&account.contact, &term);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="cell-stack">
                                                        <strong>{name_view}</strong>
                                                        <span class="text-muted">{email_view}</span>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{contact_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{account.branches.join(", ")}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{account.registered_at.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge label=account.status.as_str() tone=account.status.tone() />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()}
                            </TableBody>
                        </Table>
                    }
                }}
            />
        </PageFrame>
    }
}
