use anyhow::{Context, Result};
use clap::Parser;
use hyper::{
	header::{self, HeaderValue},
	service::{make_service_fn, service_fn},
	Body, Method, Request, Response, Server, StatusCode,
};
use routes::{build_route_map, RouteMap};
use std::{
	convert::Infallible,
	net::{IpAddr, SocketAddr},
	path::PathBuf,
	sync::Arc,
};

mod layouts;
mod pages;
mod routes;

#[derive(Parser)]
#[clap(about = "Serve or export the GEO marketing site.", version)]
struct Args {
	#[clap(subcommand)]
	command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
	/// Serve the site over http.
	Serve(ServeArgs),
	/// Render every route to a static file.
	Export(ExportArgs),
}

#[derive(clap::Args)]
struct ServeArgs {
	#[clap(long, env = "HOST", default_value = "0.0.0.0")]
	host: IpAddr,
	#[clap(long, env = "PORT", default_value = "8080")]
	port: u16,
}

#[derive(clap::Args)]
struct ExportArgs {
	#[clap(long, default_value = "build/www")]
	output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
	let env_filter = format!("{}=info", clap::crate_name!().replace("-", "_"));
	let env = env_logger::Env::default().default_filter_or(env_filter);
	env_logger::Builder::from_env(env)
		.format_level(false)
		.format_module_path(false)
		.format_timestamp(None)
		.init();
	let args = Args::parse();
	match args.command {
		Command::Serve(args) => serve(args).await,
		Command::Export(args) => export(args),
	}
}

async fn serve(args: ServeArgs) -> Result<()> {
	let routes = Arc::new(build_route_map());
	let addr = SocketAddr::new(args.host, args.port);
	let make_service = make_service_fn(move |_| {
		let routes = routes.clone();
		async move {
			Ok::<_, Infallible>(service_fn(move |request| {
				let routes = routes.clone();
				async move { Ok::<_, Infallible>(handle(&routes, request)) }
			}))
		}
	});
	let server = Server::try_bind(&addr)
		.with_context(|| format!("failed to bind {}", addr))?
		.serve(make_service);
	log::info!("serving on http://{}", addr);
	server.await?;
	Ok(())
}

fn handle(routes: &RouteMap, request: Request<Body>) -> Response<Body> {
	let method = request.method().clone();
	let path = request.uri().path().to_owned();
	let response = match (routes.get(path.as_str()), method == Method::GET) {
		(Some(route), true) => {
			let mut response = Response::new(Body::from((route.render)()));
			response.headers_mut().insert(
				header::CONTENT_TYPE,
				HeaderValue::from_static(route.content_type),
			);
			response
		}
		(Some(_), false) => status_response(StatusCode::METHOD_NOT_ALLOWED, "method not allowed"),
		(None, _) => status_response(StatusCode::NOT_FOUND, "not found"),
	};
	log::info!("{} {} {}", method, path, response.status().as_u16());
	response
}

fn status_response(status: StatusCode, body: &'static str) -> Response<Body> {
	let mut response = Response::new(Body::from(body));
	*response.status_mut() = status;
	response
}

fn export(args: ExportArgs) -> Result<()> {
	std::fs::create_dir_all(&args.output)
		.with_context(|| format!("failed to create {}", args.output.display()))?;
	for (path, route) in build_route_map().iter() {
		let file_path = args.output.join(route.file_name);
		std::fs::write(&file_path, (route.render)())
			.with_context(|| format!("failed to write {}", file_path.display()))?;
		log::info!("exported {} to {}", path, file_path.display());
	}
	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;

	fn request(method: Method, path: &str) -> Request<Body> {
		let mut request = Request::new(Body::empty());
		*request.method_mut() = method;
		*request.uri_mut() = path.parse().unwrap();
		request
	}

	#[test]
	fn test_handle() {
		let routes = build_route_map();
		let response = handle(&routes, request(Method::GET, "/"));
		assert_eq!(response.status(), StatusCode::OK);
		assert_eq!(
			response.headers()[header::CONTENT_TYPE],
			"text/html; charset=utf-8"
		);
		let response = handle(&routes, request(Method::GET, "/styles.css"));
		assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css; charset=utf-8");
		let response = handle(&routes, request(Method::GET, "/missing"));
		assert_eq!(response.status(), StatusCode::NOT_FOUND);
		let response = handle(&routes, request(Method::POST, "/"));
		assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
	}

	#[test]
	fn test_export() {
		let output = std::env::temp_dir().join(format!("geo_www_export_{}", std::process::id()));
		export(ExportArgs {
			output: output.clone(),
		})
		.unwrap();
		let index = std::fs::read_to_string(output.join("index.html")).unwrap();
		assert!(index.contains(r#"id="market""#));
		assert!(output.join("styles.css").exists());
		std::fs::remove_dir_all(&output).unwrap();
	}

	#[test]
	fn test_args() {
		let args = Args::try_parse_from(&["geo_www", "serve", "--host", "127.0.0.1", "--port", "3000"])
			.unwrap();
		match args.command {
			Command::Serve(args) => {
				assert_eq!(args.host, "127.0.0.1".parse::<IpAddr>().unwrap());
				assert_eq!(args.port, 3000);
			}
			Command::Export(_) => panic!("expected the serve command"),
		}
	}
}
