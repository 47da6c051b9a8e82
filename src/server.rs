//! `flipcards dev`: repackage whenever an artifact changes and serve the
//! standalone document over HTTP.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use notify::{Event, RecursiveMode, Watcher};
use tiny_http::{Header, Response, Server};

use crate::package::{package_paths, ArtifactPaths};

/// Start the dev loop. Blocks for as long as the server runs.
pub fn run_dev_server(
    paths: ArtifactPaths,
    port: u16,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    rebuild(&paths);

    let watched = paths.clone();
    let artifact_names = artifact_file_names(&paths);
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => {
            if (event.kind.is_modify() || event.kind.is_create())
                && touches_artifact(&event.paths, &artifact_names)
            {
                rebuild(&watched);
            }
        }
        Err(e) => log::warn!("watch error: {e}"),
    })?;
    for dir in watch_dirs(&paths) {
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    }

    let server = Server::http(("127.0.0.1", port))?;
    eprintln!("flipcards dev server");
    eprintln!("  script:   {}", paths.script.display());
    eprintln!("  style:    {}", paths.style.display());
    eprintln!("  output:   {}", paths.output.display());
    eprintln!("  preview:  http://localhost:{port}/");
    eprintln!("  watching for changes...");

    for request in server.incoming_requests() {
        let page = route(request.url(), &paths.output);
        log::debug!("{} {} -> {}", request.method(), request.url(), page.status);
        let mut response = Response::from_data(page.body).with_status_code(page.status);
        if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], page.content_type.as_bytes()) {
            response = response.with_header(header);
        }
        if let Err(e) = request.respond(response) {
            log::warn!("failed to send response: {e}");
        }
    }

    // Keep watcher alive
    drop(watcher);
    Ok(())
}

fn rebuild(paths: &ArtifactPaths) {
    match package_paths(paths) {
        Ok(report) => eprintln!("  rebuilt {} ({} bytes)", report.output.display(), report.bytes),
        Err(e) => log::warn!("repackage failed: {e}"),
    }
}

/// A response for the dev server, kept separate from `tiny_http` types.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Page {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

pub(crate) fn route(url: &str, output: &Path) -> Page {
    let path = url.split(['?', '#']).next().unwrap_or("/");
    match path {
        "/" | "/index.html" => match fs::read(output) {
            Ok(body) => Page {
                status: 200,
                content_type: "text/html; charset=utf-8",
                body,
            },
            Err(e) => Page {
                status: 503,
                content_type: "text/plain; charset=utf-8",
                body: format!("standalone document not built yet: {e}\n").into_bytes(),
            },
        },
        _ => Page {
            status: 404,
            content_type: "text/plain; charset=utf-8",
            body: b"not found\n".to_vec(),
        },
    }
}

fn artifact_file_names(paths: &ArtifactPaths) -> Vec<OsString> {
    [&paths.script, &paths.style]
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_os_string()))
        .collect()
}

/// Only artifact writes count; the output may share a directory with them.
fn touches_artifact(changed: &[PathBuf], names: &[OsString]) -> bool {
    changed.iter().any(|p| {
        p.file_name()
            .map(|n| names.iter().any(|name| name == n))
            .unwrap_or(false)
    })
}

fn watch_dirs(paths: &ArtifactPaths) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = [&paths.script, &paths.style]
        .iter()
        .map(|p| match p.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        })
        .collect();
    dirs.dedup();
    dirs
}
