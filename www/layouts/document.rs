use html::{component, html, raw};

#[derive(Clone)]
pub struct PageInfo {
	pub title: String,
	pub description: String,
}

#[component]
pub fn Document(page_info: PageInfo) {
	html! {
		<>
			{raw!("<!doctype html>")}
			<html lang="en">
				<head>
					<meta charset="utf-8" />
					<meta content="width=device-width, initial-scale=1" name="viewport" />
					<title>{page_info.title}</title>
					<meta content={page_info.description} name="description" />
					<script src="https://cdn.tailwindcss.com"></script>
					<link href="/styles.css" rel="stylesheet" />
				</head>
				<body>{children}</body>
			</html>
		</>
	}
}
