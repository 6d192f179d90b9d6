use contracts::domain::a001_campaign::{mock::mock_campaigns, Campaign};
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
pub fn CampaignList() -> impl IntoView {
    let list = ListState::new(mock_campaigns());

    view! {
        <PageFrame page_id="a001_campaign--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Gestão de Campanhas"
                subtitle="Gerencie e monitore suas campanhas promocionais"
                icon_name="fa-bullhorn"
            >
                <Button appearance=ButtonAppearance::Primary>
                    <i class="fa-solid fa-plus" aria-hidden="true"></i>
                    " Nova Campanha"
                </Button>
            </PageHeader>

            <ListScaffold
                list=list
                search_placeholder="Pesquisar por campanha ou filial..."
                render={move |page: ListPage<Campaign>| {
                    let term = list.search();
                    view! {
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Campanha"</TableHeaderCell>
                                    <TableHeaderCell>"Filial"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Postado em"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {page.items.into_iter().map(|c| {
                                    let name_view = highlight_matches(&c.name, &term);
                                    let branch_view = highlight_matches(&c.branch, &term);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{branch_view}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge label=c.status.as_str() tone=c.status.tone() />
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format!("{} {}", c.posted_date, c.posted_time)}</TableCellLayout>
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
