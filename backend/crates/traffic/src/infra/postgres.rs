//! PostgreSQL Repository Implementation
//!
//! Zone coordinates live in a PostGIS `geometry(Point)` column and are
//! decomposed with `ST_X` / `ST_Y` on every read. All statements are
//! parameterized; enum codes are bound as text.

use chrono::{NaiveDate, NaiveTime};
use kernel::id::{
    AccidentId, OperatorId, SensorId, TrafficEventId, WeatherReadingId, ZoneId,
};
use sqlx::PgPool;

use crate::domain::entity::{
    accident::{Accident, NewAccident},
    sensor::Sensor,
    traffic_event::{NewTrafficEvent, TrafficEvent},
    weather_reading::{NewWeatherReading, WeatherReading},
    zone::{Coordinates, Zone, ZoneSummary},
};
use crate::domain::repository::{
    AccidentRepository, SensorRepository, TrafficEventRepository, WeatherRepository,
    ZoneRepository,
};
use crate::domain::value_object::{Enumerated, ReportedAt};
use crate::error::{StoreError, StoreResult};

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgTrafficRepository {
    pool: PgPool,
}

impl PgTrafficRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Round-trip a trivial query; used once at startup
    pub async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

impl ZoneRepository for PgTrafficRepository {
    async fn list_zones(&self) -> StoreResult<Vec<Zone>> {
        let rows = sqlx::query_as::<_, ZoneRow>(
            r#"
            SELECT
                z.id_zona,
                z.nombre,
                ST_X(z.coordenadas) AS lng,
                ST_Y(z.coordenadas) AS lat,
                z.nivel_riesgo
            FROM zona z
            ORDER BY z.id_zona
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = rows.len(), "Listed zones");

        Ok(rows.into_iter().map(ZoneRow::into_zone).collect())
    }
}

impl TrafficEventRepository for PgTrafficRepository {
    async fn list_events(&self) -> StoreResult<Vec<TrafficEvent>> {
        let rows = sqlx::query_as::<_, TrafficEventRow>(
            r#"
            SELECT
                e.id_evento,
                e.tipo_evento,
                COALESCE(e.descripcion, '') AS descripcion,
                e.fecha,
                e.hora,
                e.id_zona,
                z.nombre AS zona_nombre,
                ST_X(z.coordenadas) AS lng,
                ST_Y(z.coordenadas) AS lat,
                e.id_usuario_operador
            FROM evento_trafico e
            INNER JOIN zona z ON e.id_zona = z.id_zona
            ORDER BY e.fecha DESC, e.hora DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = rows.len(), "Listed traffic events");

        rows.into_iter().map(TrafficEventRow::into_event).collect()
    }

    async fn create_event(&self, event: &NewTrafficEvent) -> StoreResult<TrafficEventId> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO evento_trafico (
                tipo_evento,
                descripcion,
                fecha,
                hora,
                id_zona,
                id_usuario_operador
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id_evento
            "#,
        )
        .bind(event.event_type.code())
        .bind(&event.description)
        .bind(event.reported_at.date)
        .bind(event.reported_at.time)
        .bind(event.zone_id.get())
        .bind(event.operator_id.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(TrafficEventId::new(id))
    }
}

impl AccidentRepository for PgTrafficRepository {
    async fn list_accidents(&self) -> StoreResult<Vec<Accident>> {
        let rows = sqlx::query_as::<_, AccidentRow>(
            r#"
            SELECT
                a.id_accidente,
                a.tipo,
                a.gravedad,
                COALESCE(a.causa, '') AS causa,
                a.fecha,
                a.hora,
                a.id_zona,
                z.nombre AS zona_nombre
            FROM accidente a
            INNER JOIN zona z ON a.id_zona = z.id_zona
            ORDER BY a.fecha DESC, a.hora DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = rows.len(), "Listed accidents");

        rows.into_iter().map(AccidentRow::into_accident).collect()
    }

    async fn create_accident(&self, accident: &NewAccident) -> StoreResult<AccidentId> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO accidente (
                tipo,
                gravedad,
                causa,
                fecha,
                hora,
                id_zona
            ) VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id_accidente
            "#,
        )
        .bind(accident.accident_type.code())
        .bind(accident.severity.code())
        .bind(&accident.cause)
        .bind(accident.reported_at.date)
        .bind(accident.reported_at.time)
        .bind(accident.zone_id.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(AccidentId::new(id))
    }
}

impl WeatherRepository for PgTrafficRepository {
    async fn list_readings(&self) -> StoreResult<Vec<WeatherReading>> {
        // Casts keep decoding stable if the measurements are NUMERIC columns.
        let rows = sqlx::query_as::<_, WeatherReadingRow>(
            r#"
            SELECT
                c.id_clima,
                c.temperatura::float8 AS temperatura,
                c.humedad::float8 AS humedad,
                c.visibilidad::float8 AS visibilidad,
                c.condicion,
                c.fecha,
                c.hora,
                c.id_zona,
                z.nombre AS zona_nombre
            FROM clima c
            INNER JOIN zona z ON c.id_zona = z.id_zona
            ORDER BY c.fecha DESC, c.hora DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = rows.len(), "Listed weather readings");

        rows.into_iter().map(WeatherReadingRow::into_reading).collect()
    }

    async fn create_reading(&self, reading: &NewWeatherReading) -> StoreResult<WeatherReadingId> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO clima (
                temperatura,
                humedad,
                visibilidad,
                condicion,
                fecha,
                hora,
                id_zona,
                id_usuario_operador
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id_clima
            "#,
        )
        .bind(reading.temperature)
        .bind(reading.humidity)
        .bind(reading.visibility)
        .bind(reading.condition.code())
        .bind(reading.reported_at.date)
        .bind(reading.reported_at.time)
        .bind(reading.zone_id.get())
        .bind(reading.operator_id.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(WeatherReadingId::new(id))
    }
}

impl SensorRepository for PgTrafficRepository {
    async fn list_sensors(&self) -> StoreResult<Vec<Sensor>> {
        let rows = sqlx::query_as::<_, SensorRow>(
            r#"
            SELECT
                s.id_sensor,
                s.tipo_sensor,
                s.estado,
                s.id_zona,
                z.nombre AS zona_nombre,
                ST_X(z.coordenadas) AS lng,
                ST_Y(z.coordenadas) AS lat
            FROM sensor s
            INNER JOIN zona z ON s.id_zona = z.id_zona
            ORDER BY s.id_sensor
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = rows.len(), "Listed sensors");

        Ok(rows.into_iter().map(SensorRow::into_sensor).collect())
    }
}

// ============================================================================
// Row types
// ============================================================================

fn decode_code<T: Enumerated>(column: &'static str, value: String) -> StoreResult<T> {
    T::from_code(&value).ok_or(StoreError::UnexpectedValue { column, value })
}

#[derive(sqlx::FromRow)]
struct ZoneRow {
    id_zona: i32,
    nombre: String,
    lng: f64,
    lat: f64,
    nivel_riesgo: String,
}

impl ZoneRow {
    fn into_zone(self) -> Zone {
        Zone {
            id: ZoneId::new(self.id_zona),
            name: self.nombre,
            location: Coordinates::new(self.lng, self.lat),
            risk_level: self.nivel_riesgo,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TrafficEventRow {
    id_evento: i32,
    tipo_evento: String,
    descripcion: String,
    fecha: NaiveDate,
    hora: NaiveTime,
    id_zona: i32,
    zona_nombre: String,
    lng: f64,
    lat: f64,
    id_usuario_operador: i32,
}

impl TrafficEventRow {
    fn into_event(self) -> StoreResult<TrafficEvent> {
        Ok(TrafficEvent {
            id: TrafficEventId::new(self.id_evento),
            event_type: decode_code("tipo_evento", self.tipo_evento)?,
            description: self.descripcion,
            reported_at: ReportedAt::new(self.fecha, self.hora),
            zone: ZoneSummary {
                id: ZoneId::new(self.id_zona),
                name: self.zona_nombre,
            },
            location: Coordinates::new(self.lng, self.lat),
            operator_id: OperatorId::new(self.id_usuario_operador),
        })
    }
}

#[derive(sqlx::FromRow)]
struct AccidentRow {
    id_accidente: i32,
    tipo: String,
    gravedad: String,
    causa: String,
    fecha: NaiveDate,
    hora: NaiveTime,
    id_zona: i32,
    zona_nombre: String,
}

impl AccidentRow {
    fn into_accident(self) -> StoreResult<Accident> {
        Ok(Accident {
            id: AccidentId::new(self.id_accidente),
            accident_type: decode_code("tipo", self.tipo)?,
            severity: decode_code("gravedad", self.gravedad)?,
            cause: self.causa,
            reported_at: ReportedAt::new(self.fecha, self.hora),
            zone: ZoneSummary {
                id: ZoneId::new(self.id_zona),
                name: self.zona_nombre,
            },
        })
    }
}

#[derive(sqlx::FromRow)]
struct WeatherReadingRow {
    id_clima: i32,
    temperatura: Option<f64>,
    humedad: Option<f64>,
    visibilidad: Option<f64>,
    condicion: String,
    fecha: NaiveDate,
    hora: NaiveTime,
    id_zona: i32,
    zona_nombre: String,
}

impl WeatherReadingRow {
    fn into_reading(self) -> StoreResult<WeatherReading> {
        Ok(WeatherReading {
            id: WeatherReadingId::new(self.id_clima),
            temperature: self.temperatura,
            humidity: self.humedad,
            visibility: self.visibilidad,
            condition: decode_code("condicion", self.condicion)?,
            reported_at: ReportedAt::new(self.fecha, self.hora),
            zone: ZoneSummary {
                id: ZoneId::new(self.id_zona),
                name: self.zona_nombre,
            },
        })
    }
}

#[derive(sqlx::FromRow)]
struct SensorRow {
    id_sensor: i32,
    tipo_sensor: String,
    estado: String,
    id_zona: i32,
    zona_nombre: String,
    lng: f64,
    lat: f64,
}

impl SensorRow {
    fn into_sensor(self) -> Sensor {
        Sensor {
            id: SensorId::new(self.id_sensor),
            sensor_type: self.tipo_sensor,
            status: self.estado,
            zone: ZoneSummary {
                id: ZoneId::new(self.id_zona),
                name: self.zona_nombre,
            },
            location: Coordinates::new(self.lng, self.lat),
        }
    }
}

// Needs a PostgreSQL server with PostGIS; run with
// `DATABASE_URL=... cargo test -p traffic -- --ignored`.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{EventType, WeatherCondition};

    async fn seed_zones(pool: &PgPool) {
        sqlx::query(
            r#"
            INSERT INTO zona (id_zona, nombre, coordenadas, nivel_riesgo) VALUES
                (1, 'Centro', ST_SetSRID(ST_MakePoint(-74.0721, 4.711), 4326), 'alto'),
                (2, 'Norte', ST_SetSRID(ST_MakePoint(-74.05, 4.71), 4326), 'medio')
            "#,
        )
        .execute(pool)
        .await
        .unwrap();
    }

    fn event(date: &str, time: &str) -> NewTrafficEvent {
        NewTrafficEvent {
            event_type: EventType::Slow,
            description: String::new(),
            reported_at: ReportedAt::parse(date, time).unwrap(),
            zone_id: ZoneId::new(1),
            operator_id: OperatorId::new(2),
        }
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    #[ignore = "requires PostgreSQL with PostGIS"]
    async fn test_list_zones_decomposes_point(pool: PgPool) {
        seed_zones(&pool).await;
        let repo = PgTrafficRepository::new(pool);

        let zones = repo.list_zones().await.unwrap();

        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].name, "Centro");
        assert_eq!(zones[0].location, Coordinates::new(-74.0721, 4.711));
        assert_eq!(zones[1].risk_level, "medio");
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    #[ignore = "requires PostgreSQL with PostGIS"]
    async fn test_list_events_newest_first(pool: PgPool) {
        seed_zones(&pool).await;
        let repo = PgTrafficRepository::new(pool);

        for (date, time) in [
            ("2024-01-02", "08:00"),
            ("2024-01-03", "07:00"),
            ("2024-01-02", "21:30"),
        ] {
            repo.create_event(&event(date, time)).await.unwrap();
        }

        let listed: Vec<ReportedAt> = repo
            .list_events()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.reported_at)
            .collect();

        assert_eq!(
            listed,
            vec![
                ReportedAt::parse("2024-01-03", "07:00").unwrap(),
                ReportedAt::parse("2024-01-02", "21:30").unwrap(),
                ReportedAt::parse("2024-01-02", "08:00").unwrap(),
            ]
        );
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    #[ignore = "requires PostgreSQL with PostGIS"]
    async fn test_create_reading_null_measurements(pool: PgPool) {
        seed_zones(&pool).await;
        let repo = PgTrafficRepository::new(pool);

        let id = repo
            .create_reading(&NewWeatherReading {
                temperature: None,
                humidity: Some(64.0),
                visibility: None,
                condition: WeatherCondition::Rain,
                reported_at: ReportedAt::parse("2024-01-01", "10:00").unwrap(),
                zone_id: ZoneId::new(2),
                operator_id: OperatorId::new(2),
            })
            .await
            .unwrap();

        let readings = repo.list_readings().await.unwrap();
        assert_eq!(readings[0].id, id);
        assert_eq!(readings[0].temperature, None);
        assert_eq!(readings[0].humidity, Some(64.0));
        assert_eq!(readings[0].condition, WeatherCondition::Rain);
        assert_eq!(readings[0].zone.name, "Norte");
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    #[ignore = "requires PostgreSQL with PostGIS"]
    async fn test_unknown_zone_violates_foreign_key(pool: PgPool) {
        seed_zones(&pool).await;
        let repo = PgTrafficRepository::new(pool);

        let mut orphan = event("2024-01-01", "10:00");
        orphan.zone_id = ZoneId::new(-1);

        let err = repo.create_event(&orphan).await.unwrap_err();
        assert!(err.details().contains("foreign key"));
    }
}
