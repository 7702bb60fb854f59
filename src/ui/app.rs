use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use rusqlite::Connection;
use tracing::debug;

use crate::db::{
    add_actor, add_movie, all_names_and_titles, average_birth_year_by_genre,
    find_or_create_actor, link_cast, movie_ages, movie_count_by_genre, movies_with_cast,
    paginated_titles, search_by_title_keyword, unique_genres, DEFAULT_PAGE_SIZE,
};

use super::command::Command;
use super::forms::Prompt;

/// Menu state: the one catalog connection plus the console it talks to. The
/// connection lives exactly as long as the `App` and closes when it drops.
pub struct App<R, W> {
    conn: Connection,
    prompt: Prompt<R, W>,
    current_year: i64,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(conn: Connection, input: R, out: W) -> Self {
        Self {
            conn,
            prompt: Prompt::new(input, out),
            current_year: i64::from(Local::now().year()),
        }
    }

    /// Pin the year the movie-age report measures against.
    pub fn with_current_year(mut self, year: i64) -> Self {
        self.current_year = year;
        self
    }

    /// Colour the menu header and error lines. Off by default so piped or
    /// captured output stays plain text.
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.prompt.styled = styled;
        self
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Hand back the output sink, consuming the app and closing the catalog.
    pub fn into_output(self) -> W {
        self.prompt.out
    }

    pub(crate) fn prompt_mut(&mut self) -> &mut Prompt<R, W> {
        &mut self.prompt
    }

    /// Run one command. Returns `true` when the menu loop should stop.
    pub fn handle(&mut self, command: Command) -> Result<bool> {
        debug!(?command, "dispatching menu command");
        match command {
            Command::AddMovie => self.add_movie_with_cast()?,
            Command::AddActor => self.add_actor()?,
            Command::MoviesWithCast => self.show_movies_with_cast()?,
            Command::UniqueGenres => self.show_unique_genres()?,
            Command::CountByGenre => self.show_count_by_genre()?,
            Command::AverageBirthYear => self.show_average_birth_year()?,
            Command::SearchTitle => self.search_titles()?,
            Command::PagedTitles => self.show_page()?,
            Command::NamesAndTitles => self.show_names_and_titles()?,
            Command::MovieAges => self.show_movie_ages()?,
            Command::Exit => return Ok(true),
        }
        Ok(false)
    }

    /// Insert the movie first, then collect cast members until an empty name.
    /// Each actor is committed as soon as it is entered, so a failure midway
    /// keeps the movie and whatever cast was linked before it.
    fn add_movie_with_cast(&mut self) -> Result<()> {
        let Self { conn, prompt, .. } = self;

        let title = prompt.ask("Movie title: ")?;
        let release_year = prompt.ask_integer("Release year: ", "Release year")?;
        let genre = prompt.ask("Genre: ")?;
        let movie_id = add_movie(conn, &title, release_year, &genre)?;

        writeln!(prompt.out, "Add the cast for this movie:").context("failed to write output")?;
        loop {
            let name = prompt.ask("Actor name (leave empty to finish): ")?;
            if name.is_empty() {
                break;
            }
            let actor_id = find_or_create_actor(conn, &name, || {
                prompt.ask_integer("Actor birth year: ", "Birth year")
            })?;
            link_cast(conn, movie_id, actor_id)?;
        }

        writeln!(prompt.out, "Movie added.").context("failed to write output")?;
        Ok(())
    }

    fn add_actor(&mut self) -> Result<()> {
        let Self { conn, prompt, .. } = self;

        let name = prompt.ask("Actor name: ")?;
        let birth_year = prompt.ask_integer("Birth year: ", "Birth year")?;
        add_actor(conn, &name, birth_year)?;

        writeln!(prompt.out, "Actor added.").context("failed to write output")?;
        Ok(())
    }

    fn show_movies_with_cast(&mut self) -> Result<()> {
        for row in movies_with_cast(&self.conn)? {
            writeln!(self.prompt.out, "Movie: {}, Cast: {}", row.title, row.actors)
                .context("failed to write output")?;
        }
        Ok(())
    }

    fn show_unique_genres(&mut self) -> Result<()> {
        for genre in unique_genres(&self.conn)? {
            writeln!(self.prompt.out, "{genre}").context("failed to write output")?;
        }
        Ok(())
    }

    fn show_count_by_genre(&mut self) -> Result<()> {
        for row in movie_count_by_genre(&self.conn)? {
            writeln!(self.prompt.out, "{}: {}", row.genre, row.count)
                .context("failed to write output")?;
        }
        Ok(())
    }

    fn show_average_birth_year(&mut self) -> Result<()> {
        let Self { conn, prompt, .. } = self;

        let genre = prompt.ask("Genre: ")?;
        let written = match average_birth_year_by_genre(conn, &genre)? {
            Some(avg) => writeln!(
                prompt.out,
                "Average birth year of actors in genre '{genre}': {avg:.2}"
            ),
            None => writeln!(prompt.out, "No actors found for genre '{genre}'."),
        };
        written.context("failed to write output")
    }

    fn search_titles(&mut self) -> Result<()> {
        let Self { conn, prompt, .. } = self;

        let keyword = prompt.ask("Search keyword: ")?;
        for hit in search_by_title_keyword(conn, &keyword)? {
            writeln!(prompt.out, "{hit}").context("failed to write output")?;
        }
        Ok(())
    }

    fn show_page(&mut self) -> Result<()> {
        let Self { conn, prompt, .. } = self;

        let page = prompt.ask_integer("Page number: ", "Page number")?;
        for title in paginated_titles(conn, page, DEFAULT_PAGE_SIZE)? {
            writeln!(prompt.out, "{title}").context("failed to write output")?;
        }
        Ok(())
    }

    fn show_names_and_titles(&mut self) -> Result<()> {
        for item in all_names_and_titles(&self.conn)? {
            writeln!(self.prompt.out, "{item}").context("failed to write output")?;
        }
        Ok(())
    }

    fn show_movie_ages(&mut self) -> Result<()> {
        for row in movie_ages(&self.conn, self.current_year)? {
            writeln!(
                self.prompt.out,
                "Movie: {}, Age: {} years",
                row.title, row.age
            )
            .context("failed to write output")?;
        }
        Ok(())
    }
}
