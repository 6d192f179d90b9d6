use contracts::domain::a008_guest_list::mock::mock_guest_lists;
use contracts::domain::a008_guest_list::GuestList;
use contracts::shared::list::ListPage;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::list_scaffold::ListScaffold;
use crate::shared::components::page_header::PageHeader;
use crate::shared::list_utils::{highlight_matches, ListState};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Guest groups the client created for their events.
#[component]
#[allow(non_snake_case)]
pub fn GuestListList() -> impl IntoView {
    let list = ListState::new(mock_guest_lists());

    view! {
        <PageFrame page_id="a008_guest_list--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Gerenciar Grupos de convidados"
                subtitle="Gerencie os seus grupos de convidados para os seus eventos."
                icon_name="fa-envelope"
            >
                <Button appearance=ButtonAppearance::Primary>
                    <i class="fa-solid fa-plus" aria-hidden="true"></i>
                    " Cadastrar Convite"
                </Button>
            </PageHeader>

            <ListScaffold
                list=list
                search_placeholder="Buscar por grupo ou evento..."
                render={move |page: ListPage<GuestList>| {
                    let term = list.search();
                    view! {
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Evento"</TableHeaderCell>
                                    <TableHeaderCell>"Grupo"</TableHeaderCell>
                                    <TableHeaderCell>"Quantidade"</TableHeaderCell>
                                    <TableHeaderCell>"Criado em"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {page.items.into_iter().map(|guests| {
                                    let event_view = highlight_matches(&guests.event, &term);
                                    let group_view = highlight_matches(&guests.group, &term);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{event_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{group_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--right">
                                                <TableCellLayout>{guests.quantity}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format!("{} {}", guests.created_date, guests.created_time)}</TableCellLayout>
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
