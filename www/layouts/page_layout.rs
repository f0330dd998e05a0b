use super::document::{Document, PageInfo};
use html::{component, html};

#[component]
pub fn PageLayout(page_info: PageInfo) {
	html! {
		<Document page_info={page_info}>
			<main class="page-layout-wrapper">{children}</main>
		</Document>
	}
}
