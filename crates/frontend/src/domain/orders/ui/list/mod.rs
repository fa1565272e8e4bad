pub mod state;

use self::state::create_state;
use crate::shared::api_utils::api_url;
use crate::shared::bulk_submit::{confirm, submit_bulk, BulkAction};
use crate::shared::collation;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::filter_state;
use crate::shared::grouping;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, Sortable};
use crate::shared::selection::SelectionTracker;
use chrono::{Local, NaiveDate};
use contracts::domain::{OrderFilter, OrderLineDto};
use contracts::enums::{AllocationStatus, Platform};
use contracts::shared::sla::sla_text;
use contracts::shared::thai_time::{parse_order_time, to_be_date_str, to_thai_be};
use gloo_net::http::Request;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

/// One data column of the orders table. The checkbox and SLA columns are
/// not listed: they carry no sort key and no header filter input.
pub(crate) struct ColumnDef {
    pub key: &'static str,
    pub title: &'static str,
}

pub(crate) const COLUMNS: &[ColumnDef] = &[
    ColumnDef { key: "platform", title: "แพลตฟอร์ม" },
    ColumnDef { key: "shop_name", title: "ร้านค้า" },
    ColumnDef { key: "order_id", title: "เลข Order" },
    ColumnDef { key: "sku", title: "SKU" },
    ColumnDef { key: "item_name", title: "ชื่อสินค้า" },
    ColumnDef { key: "qty", title: "จำนวน" },
    ColumnDef { key: "status", title: "สถานะ" },
    ColumnDef { key: "logistic_type", title: "ขนส่ง" },
    ColumnDef { key: "import_date", title: "วันที่นำเข้า" },
    ColumnDef { key: "order_time", title: "เวลาที่ลูกค้าสั่ง" },
];

/// Import date in the Buddhist-era convention the warehouse reads
fn display_import_date(line: &OrderLineDto) -> String {
    let Some(raw) = line.import_date.as_deref() else {
        return String::new();
    };
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(to_be_date_str)
        .unwrap_or_else(|_| raw.to_string())
}

/// Customer order time in the Buddhist-era convention
fn display_order_time(line: &OrderLineDto) -> String {
    let Some(raw) = line.order_time.as_deref() else {
        return String::new();
    };
    parse_order_time(raw)
        .map(to_thai_be)
        .unwrap_or_else(|| raw.to_string())
}

/// Rendered text of a cell, as used for header filters and ordering
fn field_text(line: &OrderLineDto, key: &str) -> String {
    match key {
        "platform" => line.platform.clone(),
        "shop_name" => line.shop_name.clone(),
        "order_id" => line.order_id.clone(),
        "sku" => line.sku.clone(),
        "item_name" => line.item_name.clone(),
        "qty" => line.qty.to_string(),
        "status" => line
            .status()
            .map(|s| s.display_name().to_string())
            .unwrap_or_else(|| line.allocation_status.clone()),
        "logistic_type" => line.logistic_type.clone().unwrap_or_default(),
        "import_date" => display_import_date(line),
        "order_time" => display_order_time(line),
        _ => String::new(),
    }
}

impl Sortable for OrderLineDto {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "qty" => self.qty.cmp(&other.qty),
            // ISO timestamps order chronologically as plain strings
            "order_time" => self.order_time.cmp(&other.order_time),
            "import_date" => self.import_date.cmp(&other.import_date),
            _ => collation::compare(&field_text(self, field), &field_text(other, field)),
        }
    }
}

fn status_badge_class(status: Option<AllocationStatus>) -> &'static str {
    match status {
        Some(AllocationStatus::ReadyAccept) => "badge badge--success",
        Some(AllocationStatus::LowStock) => "badge badge--warning",
        Some(AllocationStatus::Shortage) | Some(AllocationStatus::NotEnough) => {
            "badge badge--error"
        }
        Some(AllocationStatus::Accepted) => "badge badge--primary",
        Some(AllocationStatus::Packed) | Some(AllocationStatus::Cancelled) | None => {
            "badge badge--neutral"
        }
    }
}

fn sla_class(label: &str) -> &'static str {
    if label.starts_with("เลยกำหนด") {
        "sla sla--overdue"
    } else if label == "วันนี้" {
        "sla sla--today"
    } else {
        "sla"
    }
}

/// Server-side filters arrive on the URL; KPI shortcuts navigate with the
/// status parameter set or cleared.
fn filter_from_location() -> OrderFilter {
    let Some(window) = web_sys::window() else {
        return OrderFilter::default();
    };
    let Ok(href) = window.location().href() else {
        return OrderFilter::default();
    };
    let Ok(url) = web_sys::Url::new(&href) else {
        return OrderFilter::default();
    };
    let params = url.search_params();
    let get = |key: &str| params.get(key).unwrap_or_default();
    OrderFilter {
        platform: get("platform"),
        shop_id: get("shop_id"),
        import_date: get("import_date"),
        date_from: get("date_from"),
        date_to: get("date_to"),
        status: get("status"),
    }
}

fn kpi_navigate(status: Option<&str>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(href) = window.location().href() else {
        return;
    };
    let Ok(url) = web_sys::Url::new(&href) else {
        return;
    };
    let params = url.search_params();
    match status {
        Some(code) => params.set("status", code),
        None => params.delete("status"),
    }
    let _ = window.location().set_href(&url.href());
}

#[component]
pub fn OrdersList() -> impl IntoView {
    let state = create_state();
    let selection = RwSignal::new(SelectionTracker::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_filter_expanded, set_is_filter_expanded) = signal(false);

    // All loaded rows (unfiltered source of truth for client-side filtering)
    let all_rows: RwSignal<Vec<OrderLineDto>> = RwSignal::new(Vec::new());

    let refresh_view = move || {
        let source = all_rows.get_untracked();
        let column_filters = state.with_untracked(|s| s.column_filters.clone());
        let field = state.with_untracked(|s| s.sort_field.clone());
        let ascending = state.with_untracked(|s| s.sort_ascending);
        let page_size = state.with_untracked(|s| s.page_size);
        let page = state.with_untracked(|s| s.page);

        let mut filtered: Vec<OrderLineDto> = source
            .into_iter()
            .filter(|line| {
                COLUMNS.iter().enumerate().all(|(i, col)| {
                    let needle = column_filters
                        .get(i)
                        .map(|v| v.trim().to_lowercase())
                        .unwrap_or_default();
                    needle.is_empty()
                        || collation::normalize_cell(&field_text(line, col.key)).contains(&needle)
                })
            })
            .collect();

        filtered.sort_by(|a, b| {
            // Lines of the same order always stay adjacent (fixed pre-sort)
            let pre = collation::compare(&a.order_id, &b.order_id);
            if pre != Ordering::Equal {
                return pre;
            }
            let cmp = a.compare_by_field(b, &field);
            let cmp = if ascending { cmp } else { cmp.reverse() };
            if cmp != Ordering::Equal {
                return cmp;
            }
            a.order_time.cmp(&b.order_time)
        });

        let total = filtered.len();
        let total_pages = if total == 0 { 0 } else { (total + page_size - 1) / page_size };
        let page = page.min(total_pages.saturating_sub(1));
        let start = page * page_size;
        let end = (start + page_size).min(total);
        let page_items = if start < total {
            filtered[start..end].to_vec()
        } else {
            vec![]
        };

        let order_numbers: Vec<String> =
            page_items.iter().map(|l| l.order_id.clone()).collect();
        let group_classes = grouping::row_classes(&order_numbers);

        state.update(|s| {
            s.items = page_items;
            s.group_classes = group_classes;
            s.total_count = total;
            s.total_pages = total_pages;
            s.page = page;
        });
    };

    let load_rows = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            let mut url = api_url("/api/order_lines");
            let pairs = state.with_untracked(|s| s.filter.to_query_pairs());
            if !pairs.is_empty() {
                let qs = pairs
                    .into_iter()
                    .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
                    .collect::<Vec<_>>()
                    .join("&");
                url.push('?');
                url.push_str(&qs);
            }

            match Request::get(&url).send().await {
                Ok(response) => {
                    if response.ok() {
                        match response.json::<Vec<OrderLineDto>>().await {
                            Ok(lines) => {
                                log!("Loaded {} order lines", lines.len());
                                all_rows.set(lines);
                                state.update(|s| {
                                    s.page = 0;
                                    s.is_loaded = true;
                                });
                                refresh_view();
                            }
                            Err(e) => set_error.set(Some(format!("อ่านข้อมูลไม่สำเร็จ: {}", e))),
                        }
                    } else {
                        set_error.set(Some(format!("เซิร์ฟเวอร์ตอบกลับ {}", response.status())));
                    }
                    set_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("เชื่อมต่อไม่สำเร็จ: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    Effect::new(move |_| {
        if state.with_untracked(|s| s.is_loaded) {
            return;
        }
        let url_filter = filter_from_location();
        let saved_filters = filter_state::load_column_filters();
        state.update(|s| {
            s.filter = url_filter;
            // Restore what a previous session typed into the header filters
            if let Some(saved) = saved_filters {
                if saved.len() == COLUMNS.len() {
                    s.column_filters = saved;
                }
            }
        });
        load_rows();
    });

    let toggle_sort = move |field: &'static str| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field.to_string();
                s.sort_ascending = true;
            }
            s.page = 0;
        });
        refresh_view();
    };

    let set_column_filter = move |index: usize, value: String| {
        // Only re-filter when the text actually changed
        let changed = state.with_untracked(|s| {
            s.column_filters.get(index).map(|v| v != &value).unwrap_or(false)
        });
        if !changed {
            return;
        }
        state.update(|s| {
            s.column_filters[index] = value;
            s.page = 0;
        });
        filter_state::save_column_filters(&state.with_untracked(|s| s.column_filters.clone()));
        refresh_view();
    };

    let clear_table_filters = move || {
        state.update(|s| {
            s.column_filters = vec![String::new(); COLUMNS.len()];
            s.page = 0;
        });
        filter_state::clear_column_filters();
        refresh_view();
    };

    let go_to_page = move |new_page: usize| {
        state.update(|s| s.page = new_page);
        refresh_view();
    };

    let change_page_size = move |new_size: usize| {
        state.update(|s| {
            s.page_size = new_size;
            s.page = 0;
        });
        refresh_view();
    };

    let toggle_selection = move |id: String, checked: bool| {
        selection.update(|t| t.toggle(&id, checked));
    };

    let toggle_all = move |check_all: bool| {
        let page_ids: Vec<String> =
            state.with_untracked(|s| s.items.iter().map(|l| l.id.clone()).collect());
        selection.update(|t| {
            t.set_all_on_page(page_ids.iter().map(|id| id.as_str()), check_all)
        });
    };

    let clear_selection = move || selection.update(|t| t.clear());

    let run_bulk = move |action: BulkAction| {
        let ids = selection.with_untracked(|t| t.ids());
        let filter = state.with_untracked(|s| s.filter.clone());
        if action == BulkAction::Accept {
            let has_low_stock = all_rows.with_untracked(|rows| {
                rows.iter().any(|l| {
                    ids.contains(&l.id) && l.status() == Some(AllocationStatus::LowStock)
                })
            });
            if has_low_stock
                && !confirm(
                    "สถานะ: สินค้าน้อย (1-3 ชิ้น)\nยืนยันว่าตรวจคลังแล้ว และต้องการกดรับใช่หรือไม่?",
                )
            {
                return;
            }
        }
        submit_bulk(action, &ids, &filter);
    };

    let active_filters_count = Signal::derive(move || state.get().filter.active_count());
    let selected_count = Signal::derive(move || selection.get().len());
    let items_signal = Signal::derive(move || state.get().items);
    let selection_signal = Signal::derive(move || selection.get());

    let kpi_counts = Memo::new(move |_| {
        let rows = all_rows.get();
        AllocationStatus::all()
            .into_iter()
            .map(|status| {
                let count = rows.iter().filter(|l| l.status() == Some(status)).count();
                (status, count)
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page page--orders">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"รายการออเดอร์"</h1>
                    <span class="badge badge--primary">
                        {move || state.get().total_count.to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <Show when=move || (selected_count.get() > 0)>
                        <div class="bulk-bar">
                            <span class="bulk-bar__count">
                                {move || format!("เลือกแล้ว {} รายการ", selected_count.get())}
                            </span>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| run_bulk(BulkAction::Accept)
                            >
                                {move || format!("กดรับ ({})", selected_count.get())}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| run_bulk(BulkAction::Cancel)
                            >
                                {move || format!("ยกเลิกออเดอร์ ({})", selected_count.get())}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| clear_selection()
                            >
                                "ล้างการเลือก"
                            </Button>
                        </div>
                    </Show>
                </div>
            </div>

            <div class="kpi-bar">
                <button class="kpi-chip" on:click=move |_| kpi_navigate(None)>
                    "ทั้งหมด " {move || all_rows.get().len()}
                </button>
                {move || {
                    kpi_counts
                        .get()
                        .into_iter()
                        .map(|(status, count)| {
                            view! {
                                <button
                                    class="kpi-chip"
                                    on:click=move |_| kpi_navigate(Some(status.code()))
                                >
                                    {status.display_name()} " " {count}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="filter-panel">
                <div class="filter-panel-header">
                    <div
                        class="filter-panel-header__left"
                        on:click=move |_| set_is_filter_expanded.update(|e| *e = !*e)
                    >
                        <svg
                            width="16" height="16" viewBox="0 0 24 24"
                            fill="none" stroke="currentColor" stroke-width="2"
                            stroke-linecap="round" stroke-linejoin="round"
                            class=move || if is_filter_expanded.get() {
                                "filter-panel__chevron filter-panel__chevron--expanded"
                            } else {
                                "filter-panel__chevron"
                            }
                        >
                            <polyline points="6 9 12 15 18 9"></polyline>
                        </svg>
                        {icon("filter")}
                        <span class="filter-panel__title">"ตัวกรอง"</span>
                        {move || {
                            let count = active_filters_count.get();
                            if count > 0 {
                                view! { <span class="filter-panel__badge">{count}</span> }
                                    .into_any()
                            } else {
                                view! { <></> }.into_any()
                            }
                        }}
                    </div>

                    <div class="filter-panel-header__center">
                        <PaginationControls
                            current_page=Signal::derive(move || state.get().page)
                            total_pages=Signal::derive(move || state.get().total_pages)
                            total_count=Signal::derive(move || state.get().total_count)
                            page_size=Signal::derive(move || state.get().page_size)
                            on_page_change=Callback::new(go_to_page)
                            on_page_size_change=Callback::new(change_page_size)
                            page_size_options=vec![50, 100, 200, 500]
                        />
                    </div>

                    <div class="filter-panel-header__right">
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| clear_table_filters()
                        >
                            "ล้างตัวกรองตาราง"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| load_rows()
                            disabled=Signal::derive(move || loading.get())
                        >
                            {move || if loading.get() { "กำลังโหลด..." } else { "รีเฟรช" }}
                        </Button>
                    </div>
                </div>

                <Show when=move || is_filter_expanded.get()>
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <label class="filter-field">
                                "แพลตฟอร์ม:"
                                <select
                                    on:change=move |ev| {
                                        state.update(|s| s.filter.platform = event_target_value(&ev));
                                    }
                                >
                                    <option value="" selected=move || {
                                        state.with(|s| s.filter.platform.is_empty())
                                    }>"ทุกแพลตฟอร์ม"</option>
                                    {Platform::all().into_iter().map(|p| {
                                        let code = p.code();
                                        view! {
                                            <option value=code selected=move || {
                                                state.with(|s| s.filter.platform == code)
                                            }>
                                                {p.display_name()}
                                            </option>
                                        }
                                    }).collect_view()}
                                </select>
                            </label>

                            <label class="filter-field">
                                "ร้านค้า:"
                                <input
                                    type="text"
                                    prop:value=move || state.with(|s| s.filter.shop_id.clone())
                                    on:change=move |ev| {
                                        state.update(|s| s.filter.shop_id = event_target_value(&ev));
                                    }
                                />
                            </label>

                            <label class="filter-field">
                                "วันที่นำเข้า:"
                                <input
                                    type="date"
                                    prop:value=move || state.with(|s| s.filter.import_date.clone())
                                    on:change=move |ev| {
                                        state.update(|s| s.filter.import_date = event_target_value(&ev));
                                    }
                                />
                            </label>

                            <label class="filter-field">
                                "จาก:"
                                <input
                                    type="date"
                                    prop:value=move || state.with(|s| s.filter.date_from.clone())
                                    on:change=move |ev| {
                                        state.update(|s| s.filter.date_from = event_target_value(&ev));
                                    }
                                />
                            </label>

                            <label class="filter-field">
                                "ถึง:"
                                <input
                                    type="date"
                                    prop:value=move || state.with(|s| s.filter.date_to.clone())
                                    on:change=move |ev| {
                                        state.update(|s| s.filter.date_to = event_target_value(&ev));
                                    }
                                />
                            </label>

                            <label class="filter-field">
                                "สถานะ:"
                                <select
                                    on:change=move |ev| {
                                        state.update(|s| s.filter.status = event_target_value(&ev));
                                    }
                                >
                                    <option value="" selected=move || {
                                        state.with(|s| s.filter.status.is_empty())
                                    }>"ทุกสถานะ"</option>
                                    {AllocationStatus::all().into_iter().map(|st| {
                                        let code = st.code();
                                        view! {
                                            <option value=code selected=move || {
                                                state.with(|s| s.filter.status == code)
                                            }>
                                                {st.display_name()}
                                            </option>
                                        }
                                    }).collect_view()}
                                </select>
                            </label>

                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| {
                                    state.update(|s| s.page = 0);
                                    load_rows();
                                }
                                disabled=Signal::derive(move || loading.get())
                            >
                                "ค้นหา"
                            </Button>
                        </Flex>
                    </div>
                </Show>
            </div>

            {move || {
                error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })
            }}

            <div class="table-wrapper">
                <Table attr:style="width: 100%; min-width: 1200px;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                items=items_signal
                                selection=selection_signal
                                get_id=Callback::new(|line: OrderLineDto| line.id.clone())
                                on_change=Callback::new(toggle_all)
                            />
                            {COLUMNS.iter().map(|col| {
                                let key = col.key;
                                view! {
                                    <TableHeaderCell resizable=false>
                                        <div
                                            class="table__sortable-header"
                                            style="cursor: pointer;"
                                            on:click=move |_| toggle_sort(key)
                                        >
                                            {col.title}
                                            <span class=move || {
                                                state.with(|s| get_sort_class(&s.sort_field, key))
                                            }>
                                                {move || get_sort_indicator(
                                                    &state.with(|s| s.sort_field.clone()),
                                                    key,
                                                    state.with(|s| s.sort_ascending),
                                                )}
                                            </span>
                                        </div>
                                    </TableHeaderCell>
                                }
                            }).collect_view()}
                            <TableHeaderCell resizable=false>"กำหนดส่ง"</TableHeaderCell>
                        </TableRow>
                        <TableRow>
                            <TableHeaderCell resizable=false class="fixed-checkbox-column">
                                ""
                            </TableHeaderCell>
                            {COLUMNS.iter().enumerate().map(|(i, _col)| {
                                view! {
                                    <TableHeaderCell resizable=false class="table__filter-cell">
                                        <input
                                            type="text"
                                            class="table__filter-input"
                                            placeholder="ค้นหา..."
                                            prop:value=move || state.with(|s| {
                                                s.column_filters.get(i).cloned().unwrap_or_default()
                                            })
                                            on:input=move |ev| {
                                                set_column_filter(i, event_target_value(&ev));
                                            }
                                            on:change=move |ev| {
                                                set_column_filter(i, event_target_value(&ev));
                                            }
                                        />
                                    </TableHeaderCell>
                                }
                            }).collect_view()}
                            <TableHeaderCell resizable=false class="table__filter-cell">
                                ""
                            </TableHeaderCell>
                        </TableRow>
                    </TableHeader>

                    <TableBody>
                        {move || {
                            let today = Local::now().date_naive();
                            let s = state.get();
                            if s.items.is_empty() {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan="12">
                                            <TableCellLayout>
                                                {if loading.get() { "กำลังโหลด..." } else { "ไม่มีข้อมูล" }}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }.into_any();
                            }
                            let group_classes = s.group_classes;
                            s.items
                                .into_iter()
                                .enumerate()
                                .map(|(i, line)| {
                                    let group_class = group_classes
                                        .get(i)
                                        .cloned()
                                        .unwrap_or_default();
                                    let sla =
                                        sla_text(line.platform_kind(), line.order_dt(), today);
                                    let status = line.status();
                                    let status_text = field_text(&line, "status");
                                    let import_date_text = display_import_date(&line);
                                    let order_time_text = display_order_time(&line);
                                    view! {
                                        <TableRow>
                                            <TableCellCheckbox
                                                item_id=line.id.clone()
                                                selection=selection_signal
                                                on_change=Callback::new(move |(id, checked)| {
                                                    toggle_selection(id, checked)
                                                })
                                            />
                                            <TableCell>
                                                <TableCellLayout>{line.platform.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {line.shop_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell class=group_class>
                                                <TableCellLayout>{line.order_id.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{line.sku.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {line.item_name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span style="font-variant-numeric: tabular-nums;">
                                                        {line.qty}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_badge_class(status)>
                                                        {status_text}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {line.logistic_type.clone().unwrap_or_else(|| "-".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{import_date_text}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{order_time_text}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=sla_class(&sla)>{sla.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
