use contracts::domain::a002_invite::{mock::mock_invites, Invite};
use contracts::shared::list::ListPage;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_scaffold::ListScaffold;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::list_utils::{highlight_matches, ListState};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
#[allow(non_snake_case)]
pub fn InviteList() -> impl IntoView {
    let list = ListState::new(mock_invites());

    view! {
        <PageFrame page_id="a002_invite--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Gestão de Convites"
                subtitle="Gerencie e acompanhe todos os convites dos seus eventos"
                icon_name="fa-envelope-open-text"
            >
                ""
            </PageHeader>

            <ListScaffold
                list=list
                search_placeholder="Buscar por cliente, email ou evento..."
                render={move |page: ListPage<Invite>| {
                    let term = list.search();
                    view! {
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Cliente"</TableHeaderCell>
                                    <TableHeaderCell>"Evento"</TableHeaderCell>
                                    <TableHeaderCell>"Convidados"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Criado em"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {page.items.into_iter().map(|invite| {
                                    let client_name_view = highlight_matches(&invite.client_name, &term);
                                    let client_email_view = highlight_matches(&invite.client_email, &term);
                                    let event_name_view = highlight_matches(&invite.event_name, &term);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <div class="cell-stack">
                                                        <strong>{client_name_view}</strong>
                                                        <span class="text-muted">{client_email_view}</span>
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{event_name_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{invite.guests}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge label=invite.status.as_str() tone=invite.status.tone() />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format!("{} {}", invite.created_date, invite.created_time)}</TableCellLayout>
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
