//! The landing page template
//!
//! Context keys: `client_name`, `marketing_copy.{title,tagline,description}`,
//! `marketing_copy.benefits` (list) and `year`.

pub(crate) const PAGE_TEMPLATE: &str = r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ client_name }} – Door‑Knocking Campaign</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css" rel="stylesheet">
  </head>
  <body>
    <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
      <div class="container-fluid">
        <a class="navbar-brand" href="#">{{ client_name }}</a>
      </div>
    </nav>
    <header class="bg-primary text-white py-5">
      <div class="container">
        <h1 class="display-4">{{ marketing_copy.title }}</h1>
        <p class="lead">{{ marketing_copy.tagline }}</p>
      </div>
    </header>
    <main class="container my-5">
      <h2>About the Offer</h2>
      <p>{{ marketing_copy.description }}</p>
      <h2>Why Choose Us</h2>
      <ul>
{{ each marketing_copy.benefits |benefit| }}        <li>{{ benefit }}</li>
{{ /each }}      </ul>
    </main>
    <footer class="bg-light py-4 mt-auto border-top">
      <div class="container text-center">
        <span class="text-muted">&copy; {{ client_name }} {{ year }}. All rights reserved.</span>
      </div>
    </footer>
  </body>
</html>
"##;
