// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Renders `src/Track.ts` and the `src/index.ts` barrel.

use super::naming::string_literal;
use super::GENERATED_HEADER;
use crate::schema::ClientConfig;

/// API URL the generated client falls back to.
pub const DEFAULT_API_URL: &str = "https://api.track.com";

const TRACK_TEMPLATE: &str = r#"import { Platform } from 'react-native';

import { TrackConfig, TrackEvent } from './types';

export const SDK_CLIENT = __CLIENT_NAME__;
export const SDK_VERSION = __VERSION__;

const DEFAULT_API_URL = __DEFAULT_API_URL__;
const EVENTS_PATH = '/api/events';

export class TrackError extends Error {
  readonly status?: number;
  readonly body?: string;

  constructor(message: string, status?: number, body?: string) {
    super(message);
    this.name = 'TrackError';
    this.status = status;
    this.body = body;
  }
}

export class Track {
  private static instance: Track | null = null;
  private readonly config: Required<TrackConfig>;
  private userId: string | null = null;

  private constructor(config: TrackConfig) {
    this.config = {
      apiKey: config.apiKey,
      apiUrl: (config.apiUrl ?? DEFAULT_API_URL).replace(/\/+$/, ''),
      debug: config.debug ?? false,
    };
  }

  public static initialize(config: TrackConfig): Track {
    if (!Track.instance) {
      Track.instance = new Track(config);
    } else if (Track.instance.config.debug) {
      console.warn('Track already initialized; ignoring new configuration');
    }
    return Track.instance;
  }

  public static getInstance(): Track {
    if (!Track.instance) {
      throw new TrackError('Track not initialized. Call Track.initialize() first.');
    }
    return Track.instance;
  }

  public static reset(): void {
    Track.instance = null;
  }

  public setUserId(userId: string): void {
    this.userId = userId;
    if (this.config.debug) {
      console.log('User ID set to:', userId);
    }
  }

  public getUserId(): string | null {
    return this.userId;
  }

  public clearUserId(): void {
    this.userId = null;
    if (this.config.debug) {
      console.log('User ID cleared');
    }
  }

  public async trackEvent(event: TrackEvent): Promise<void> {
    const url = `${this.config.apiUrl}${EVENTS_PATH}`;
    const payload = {
      platform: Platform.OS,
      version: Platform.Version,
      ...event,
      timestamp: event.timestamp ?? new Date().toISOString(),
      userId: event.userId ?? this.userId ?? undefined,
    };

    try {
      if (this.config.debug) {
        console.log('Sending event to:', url);
        console.log('Event data:', payload);
      }

      const response = await fetch(url, {
        method: 'POST',
        headers: {
          'Content-Type': 'application/json',
          'Authorization': `Bearer ${this.config.apiKey}`,
        },
        body: JSON.stringify(payload),
      });

      if (!response.ok) {
        const body = await response.text();
        throw new TrackError(
          `Failed to send event: ${response.status} - ${body}`,
          response.status,
          body,
        );
      }

      if (this.config.debug) {
        console.log('Event sent successfully:', payload.name);
      }
    } catch (error) {
      if (this.config.debug) {
        console.error('Error sending event:', error);
        console.error('Event that failed:', payload);
        console.error('API URL:', this.config.apiUrl);
      }
      throw error;
    }
  }
}
"#;

const INDEX: &str = "export * from './Track';\nexport * from './types';\n";

/// `src/Track.ts`. Substitution only; the emitted code is not checked here.
pub fn render_track(config: &ClientConfig) -> String {
	let body = TRACK_TEMPLATE
		.replace("__CLIENT_NAME__", &string_literal(&config.client_name))
		.replace("__VERSION__", &string_literal(&config.version))
		.replace("__DEFAULT_API_URL__", &string_literal(DEFAULT_API_URL));
	format!("{GENERATED_HEADER}\n{body}")
}

/// `src/index.ts`.
pub fn render_index() -> String {
	format!("{GENERATED_HEADER}\n{INDEX}")
}
